//! Type validator

use serde_json::Value;

use crate::foundation::{ValueType, ViolationKind};
use crate::macros::validator;

validator! {
    /// Validates that a value is of the declared [`ValueType`].
    ///
    /// `object` accepts only plain objects (never arrays or `null`);
    /// `array` accepts only real arrays.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub TypeOf { expected: ValueType } for Value;
    rule(self, input) { self.expected.matches(input) }
    error(self, input) { ViolationKind::InvalidType }
    fn type_of(expected: ValueType);
}
