//! Numeric range validators
//!
//! Bounds are inclusive. Numbers and numeric strings are compared; a value
//! with no numeric reading cannot meet a bound and fails it.

use serde_json::Value;

use crate::foundation::ViolationKind;
use crate::foundation::value::numeric_of;
use crate::macros::validator;

validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq)]
    pub MinValue { min: f64 } for Value;
    rule(self, input) { numeric_of(input).is_some_and(|n| n >= self.min) }
    error(self, input) { ViolationKind::ValueTooSmall }
    fn min_value(min: f64);
}

validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq)]
    pub MaxValue { max: f64 } for Value;
    rule(self, input) { numeric_of(input).is_some_and(|n| n <= self.max) }
    error(self, input) { ViolationKind::ValueTooLarge }
    fn max_value(max: f64);
}

// ============================================================================
// TESTS
// ============================================================================
