//! Fatal errors.
//!
//! Anything in this module aborts a call. Rule violations found in the input
//! are never reported here; they are collected as
//! [`Violation`](crate::Violation)s inside a [`ValidationReport`](crate::ValidationReport).

/// Result type for fallible shapecheck operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that terminate a validation or inference call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The value handed to `test` was `null`.
    #[error("no input value to validate")]
    MissingInput,

    /// A declarative schema could not be normalized.
    #[error("invalid schema at '{path}': {reason}")]
    InvalidSchema {
        /// Location of the offending schema node.
        path: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A `type` constraint named an unsupported type.
    #[error("unknown type '{name}' at '{path}'")]
    UnknownType {
        /// Location of the offending schema node.
        path: String,
        /// The unsupported type name.
        name: String,
    },

    /// A `format` constraint named an unsupported format.
    #[error("unknown format '{name}' at '{path}'")]
    UnknownFormat {
        /// Location of the offending schema node.
        path: String,
        /// The unsupported format name.
        name: String,
    },

    /// A `matchesPattern` constraint is not a valid regular expression.
    #[error("invalid pattern at '{path}': {source}")]
    InvalidPattern {
        /// Location of the offending schema node.
        path: String,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Nesting went deeper than the configured ceiling.
    #[error("nesting depth exceeds limit of {limit} at '{path}'")]
    DepthLimitExceeded {
        /// The configured `max_depth`.
        limit: usize,
        /// Where the ceiling was hit.
        path: String,
    },

    /// Schema inference needs an object at the top level.
    #[error("cannot infer a schema from a {found} sample; expected an object")]
    SampleNotObject {
        /// JSON type name of the sample.
        found: &'static str,
    },

    /// JSON (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
