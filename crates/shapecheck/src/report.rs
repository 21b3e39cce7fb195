//! Aggregated validation results

use std::fmt;

use serde::Serialize;

use crate::engine::{Collected, Outcome};
use crate::foundation::Violation;

/// The outcome of one `test` call.
///
/// `errors` lists structural violations first, then failed field checks,
/// each group in traversal order. `success` is true exactly when `errors` is
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// True if no rule was broken.
    pub success: bool,
    /// Every broken rule.
    pub errors: Vec<Violation>,
}

impl ValidationReport {
    pub(crate) fn aggregate(collected: Collected<'_>) -> Self {
        let Collected { results, errors } = collected;
        let errors: Vec<Violation> = errors
            .into_iter()
            .chain(results.into_iter().filter(|outcome| !outcome.passed()))
            .filter_map(into_violation)
            .collect();

        Self {
            success: errors.is_empty(),
            errors,
        }
    }

    /// True if no rule was broken.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.success
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True if there are no violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the violations in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.errors.iter()
    }

    /// Converts into a `Result`, failing with the report itself.
    pub fn into_result(self) -> Result<(), Self> {
        if self.success { Ok(()) } else { Err(self) }
    }
}

fn into_violation(outcome: Outcome<'_>) -> Option<Violation> {
    let kind = outcome.failure?;
    Some(Violation::new(
        outcome.key,
        outcome.path,
        outcome.value.clone(),
        kind,
    ))
}

impl<'r> IntoIterator for &'r ValidationReport {
    type Item = &'r Violation;
    type IntoIter = std::slice::Iter<'r, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            return f.write_str("validation passed");
        }
        write!(f, "validation failed with {} error(s)", self.errors.len())?;
        for violation in &self.errors {
            write!(f, "\n  {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}
