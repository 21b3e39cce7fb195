//! Caller-supplied pattern validator

use regex::Regex;
use serde_json::Value;

use crate::foundation::ViolationKind;
use crate::foundation::value::string_form;
use crate::macros::validator;

validator! {
    /// Validates that a value's string form matches a regular expression.
    ///
    /// The empty string gets no exemption: it passes only if the pattern
    /// itself accepts it.
    pub MatchesPattern { pattern: Regex } for Value;
    rule(self, input) { self.pattern.is_match(&string_form(input)) }
    error(self, input) { ViolationKind::PatternMismatch }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
    fn matches_pattern(pattern: &str) -> regex::Error;
}

impl MatchesPattern {
    /// The pattern source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl PartialEq for MatchesPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}
