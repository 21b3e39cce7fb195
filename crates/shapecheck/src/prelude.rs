//! Prelude module for convenient imports.
//!
//! ```rust
//! use shapecheck::prelude::*;
//!
//! let validator = Validator::new(ValidatorConfig::default().with_silent(true));
//! assert!(validator.config().silent);
//! assert!(min_length(2).validate(&serde_json::json!("ok")).is_ok());
//! ```

// ============================================================================
// FACADE
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use crate::error::Error;
pub use crate::report::ValidationReport;
pub use crate::validator::Validator;

// ============================================================================
// SCHEMA
// ============================================================================

pub use crate::schema::{ObjectSchema, PropertySchema, Schema, SchemaNode};

// ============================================================================
// FOUNDATION AND VALIDATORS
// ============================================================================

pub use crate::foundation::{Validate, ValueType, Violation, ViolationKind};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
