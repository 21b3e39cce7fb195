//! Field validators
//!
//! One validator per declarable constraint. Each checks a single value and
//! fails with the [`ViolationKind`](crate::ViolationKind) it stands for.
//!
//! | Constraint       | Validator          | Failure             |
//! |------------------|--------------------|---------------------|
//! | `type`           | [`TypeOf`]         | `Invalid type`      |
//! | `format`         | [`MatchesFormat`]  | `Invalid format`    |
//! | `minLength`      | [`MinLength`]      | `Length too short`  |
//! | `maxLength`      | [`MaxLength`]      | `Length too long`   |
//! | `minValue`       | [`MinValue`]       | `Value too small`   |
//! | `maxValue`       | [`MaxValue`]       | `Value too large`   |
//! | `matchesPattern` | [`MatchesPattern`] | `Pattern does not match` |
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use shapecheck::foundation::Validate;
//! use shapecheck::validators::{Format, matches_format, min_value};
//!
//! assert!(matches_format(Format::Date).validate(&json!("2024-01-01")).is_ok());
//! assert!(matches_format(Format::Date).validate(&json!("20240101")).is_err());
//! assert!(min_value(1000.0).validate(&json!(999)).is_err());
//! ```

pub mod format;
pub mod length;
pub mod pattern;
pub mod range;
pub mod types;

pub use format::{Format, MatchesFormat, matches_format};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use pattern::{MatchesPattern, matches_pattern};
pub use range::{MaxValue, MinValue, max_value, min_value};
pub use types::{TypeOf, type_of};
