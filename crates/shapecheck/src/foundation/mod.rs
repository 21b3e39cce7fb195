//! Core validation types and traits
//!
//! This module contains the building blocks shared by the field validators,
//! the engine and the inference engine:
//!
//! - **Traits**: [`Validate`]
//! - **Values**: [`ValueType`] plus the string / numeric / length views the
//!   field validators measure
//! - **Violations**: [`ViolationKind`], [`Violation`]
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use shapecheck::foundation::{Validate, ViolationKind};
//! use shapecheck::validators::min_length;
//!
//! assert!(min_length(3).validate(&json!("hello")).is_ok());
//! assert_eq!(
//!     min_length(3).validate(&json!("hi")),
//!     Err(ViolationKind::LengthTooShort)
//! );
//! ```

pub mod traits;
pub mod value;
pub mod violation;

pub use traits::Validate;
pub use value::ValueType;
pub use violation::{Violation, ViolationKind};

/// Result of a single field check.
pub type CheckResult = Result<(), ViolationKind>;
