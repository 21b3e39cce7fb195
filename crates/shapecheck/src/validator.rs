//! The validator facade.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::diagnostics::{DiagnosticSink, Emitter, TracingSink};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::infer::Inferer;
use crate::report::ValidationReport;
use crate::schema::Schema;

/// Entry point for validation and inference.
///
/// A validator holds only its configuration and diagnostic sink, both fixed
/// at construction. Calls share no other state, so one validator can be
/// cloned or shared across threads freely.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shapecheck::{Validator, ValidatorConfig};
///
/// let validator = Validator::new(ValidatorConfig::default().with_silent(true));
/// let sample = json!({ "name": "Ada", "tags": ["math"] });
///
/// let schema = validator.schema_from(&sample)?;
/// assert!(validator.test(&schema, &sample)?.success);
///
/// let report = validator.test(&schema, &json!({ "name": "", "extra": 1 }))?;
/// assert!(!report.success);
/// # Ok::<(), shapecheck::Error>(())
/// ```
#[derive(Clone)]
pub struct Validator {
    config: ValidatorConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl Validator {
    /// Creates a validator that reports diagnostics through `tracing`.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            sink: Arc::new(TracingSink),
        }
    }

    /// Routes diagnostics to `sink` instead of `tracing`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The configuration fixed at construction.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `input` against `schema`.
    ///
    /// Every rule is checked; the report collects all violations.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingInput`] if `input` is `null`
    /// - [`Error::DepthLimitExceeded`] if nesting exceeds
    ///   [`ValidatorConfig::max_depth`]
    pub fn test(&self, schema: &Schema, input: &Value) -> Result<ValidationReport> {
        if input.is_null() {
            return Err(Error::MissingInput);
        }
        tracing::trace!(properties = schema.root.properties.len(), "validation started");

        let collected = Engine::new(self.emitter(), self.config.max_depth).run(schema, input)?;
        let checked = collected.results.len();
        let report = ValidationReport::aggregate(collected);
        tracing::debug!(
            checked,
            errors = report.errors.len(),
            success = report.success,
            "validation finished"
        );
        Ok(report)
    }

    /// Normalizes a declarative `schema` and validates `input` against it.
    ///
    /// # Errors
    ///
    /// Any schema error from [`Schema::from_value`], plus the errors of
    /// [`test`](Self::test).
    pub fn test_value(&self, schema: &Value, input: &Value) -> Result<ValidationReport> {
        let schema = Schema::from_value(schema)?;
        self.test(&schema, input)
    }

    /// Infers a strict schema from `sample`.
    ///
    /// # Errors
    ///
    /// - [`Error::SampleNotObject`] if `sample` is not an object
    /// - [`Error::DepthLimitExceeded`] if nesting exceeds
    ///   [`ValidatorConfig::max_depth`]
    pub fn schema_from(&self, sample: &Value) -> Result<Schema> {
        tracing::trace!("schema inference started");
        let schema = Inferer::new(self.emitter(), self.config.max_depth).schema(sample)?;
        tracing::debug!(
            properties = schema.root.properties.len(),
            "schema inferred"
        );
        Ok(schema)
    }

    fn emitter(&self) -> Emitter<'_> {
        Emitter::new(self.sink.as_ref(), self.config.silent)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
