//! Core traits for the validation system

use crate::foundation::ViolationKind;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every field validator implements.
///
/// A validator checks one declared constraint against one value and reports
/// the [`ViolationKind`] it stands for when the value does not satisfy it.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use shapecheck::foundation::{Validate, ViolationKind};
///
/// struct NonNegative;
///
/// impl Validate for NonNegative {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ViolationKind> {
///         match input.as_f64() {
///             Some(n) if n < 0.0 => Err(ViolationKind::ValueTooSmall),
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(NonNegative.validate(&json!(3)).is_ok());
/// assert!(NonNegative.validate(&json!(-3)).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ViolationKind>;
}

/// An absent constraint accepts everything.
///
/// Property schemas hold each constraint as an `Option`, so the ordered
/// dispatch only has to chain the options.
impl<V: Validate> Validate for Option<V> {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ViolationKind> {
        match self {
            Some(validator) => validator.validate(input),
            None => Ok(()),
        }
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ViolationKind> {
        (**self).validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ViolationKind> {
            Err(ViolationKind::PatternMismatch)
        }
    }

    #[test]
    fn none_is_vacuous() {
        let absent: Option<AlwaysFails> = None;
        assert!(absent.validate("anything").is_ok());
    }

    #[test]
    fn some_delegates() {
        assert_eq!(
            Some(AlwaysFails).validate("anything"),
            Err(ViolationKind::PatternMismatch)
        );
    }

    #[test]
    fn reference_delegates() {
        let validator = AlwaysFails;
        let by_ref: &dyn Validate<Input = str> = &validator;
        assert!(by_ref.validate("x").is_err());
    }
}
