//! # shapecheck
//!
//! Declarative shape validation for JSON-like data, plus conservative schema
//! inference from sample documents.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use shapecheck::{Schema, Validator};
//!
//! let schema: Schema = serde_json::from_value(json!({
//!     "properties": {
//!         "name": { "type": "string", "minLength": 1 },
//!         "phone": { "type": "number", "minValue": 1000 },
//!         "required": ["name", "phone"]
//!     }
//! }))?;
//!
//! let report = Validator::default().test(&schema, &json!({ "name": "Ada", "phone": 999 }))?;
//! assert!(!report.success);
//! assert_eq!(report.errors[0].key, "phone");
//! assert_eq!(report.errors[0].message(), "Value too small");
//! # Ok::<(), shapecheck::Error>(())
//! ```
//!
//! ## How a call works
//!
//! 1. The declarative schema is normalized once into a tagged [`SchemaNode`]
//!    tree ([`Schema::from_value`]).
//! 2. The validation engine walks the schema alongside the input, running the
//!    [field validators](validators) on every present property and checking
//!    required / additional keys at every object level.
//! 3. The aggregator orders structural violations before field violations and
//!    computes the success flag ([`ValidationReport`]).
//!
//! Validation never stops at the first failure; only a missing (`null`) input,
//! a malformed schema or an exceeded depth ceiling abort a call with [`Error`].
//!
//! ## Schema inference
//!
//! [`Validator::schema_from`] derives a strict schema from a sample: every key
//! required, no additional keys, non-empty strings, and an `items` schema for
//! arrays whose elements share one type.

pub mod config;
pub mod diagnostics;
mod engine;
pub mod error;
pub mod foundation;
pub mod infer;
mod macros;
pub mod prelude;
pub mod report;
pub mod schema;
pub mod validator;
pub mod validators;

pub use config::ValidatorConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use error::{Error, Result};
pub use foundation::{Validate, ValueType, Violation, ViolationKind};
pub use report::ValidationReport;
pub use schema::{Format, ObjectSchema, PropertySchema, Schema, SchemaNode};
pub use validator::Validator;

/// Validates `input` against `schema` with a default [`Validator`].
///
/// Diagnostics go to [`TracingSink`]; use a configured [`Validator`] to
/// silence them or to route them elsewhere.
pub fn test(schema: &Schema, input: &serde_json::Value) -> Result<ValidationReport> {
    Validator::default().test(schema, input)
}

/// Infers a schema from `sample` with a default [`Validator`].
pub fn schema_from(sample: &serde_json::Value) -> Result<Schema> {
    Validator::default().schema_from(sample)
}
