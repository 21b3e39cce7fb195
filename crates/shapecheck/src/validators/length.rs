//! Length validators
//!
//! Arrays and objects are measured by entry count; every other value by the
//! number of Unicode scalar values in its string form.

use serde_json::Value;

use crate::foundation::ViolationKind;
use crate::foundation::value::length_of;
use crate::macros::validator;

// ============================================================================
// MIN LENGTH
// ============================================================================

validator! {
    /// Validates that a value has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for Value;
    rule(self, input) { length_of(input) >= self.min }
    error(self, input) { ViolationKind::LengthTooShort }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

validator! {
    /// Validates that a value does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for Value;
    rule(self, input) { length_of(input) <= self.max }
    error(self, input) { ViolationKind::LengthTooLong }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
