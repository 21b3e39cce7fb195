//! Violation kinds and reported violations
//!
//! Violations are plain data: the engine collects them and never aborts on
//! one. Text is rendered only through `Display` and serialization, so the
//! kind itself stays renderer-agnostic.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

// ============================================================================
// VIOLATION KIND
// ============================================================================

/// What rule a value or container broke.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ViolationKind {
    /// Required keys missing from an object level, in schema order.
    #[error("Missing the required key: '{}'!", .0.join(", "))]
    MissingRequiredKey(Vec<String>),

    /// Keys present at an object level that forbids additional properties,
    /// in input order.
    #[error("Has additional disallowed properties: '{}'!", .0.join(", "))]
    DisallowedAdditionalProperty(Vec<String>),

    /// `type` constraint failed.
    #[error("Invalid type")]
    InvalidType,

    /// `format` constraint failed.
    #[error("Invalid format")]
    InvalidFormat,

    /// `minLength` constraint failed.
    #[error("Length too short")]
    LengthTooShort,

    /// `maxLength` constraint failed.
    #[error("Length too long")]
    LengthTooLong,

    /// `minValue` constraint failed.
    #[error("Value too small")]
    ValueTooSmall,

    /// `maxValue` constraint failed.
    #[error("Value too large")]
    ValueTooLarge,

    /// `matchesPattern` constraint failed.
    #[error("Pattern does not match")]
    PatternMismatch,
}

impl ViolationKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredKey(_) => "missing_required_key",
            Self::DisallowedAdditionalProperty(_) => "disallowed_additional_property",
            Self::InvalidType => "invalid_type",
            Self::InvalidFormat => "invalid_format",
            Self::LengthTooShort => "length_too_short",
            Self::LengthTooLong => "length_too_long",
            Self::ValueTooSmall => "value_too_small",
            Self::ValueTooLarge => "value_too_large",
            Self::PatternMismatch => "pattern_mismatch",
        }
    }

    /// True for container-level violations (required / additional keys).
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredKey(_) | Self::DisallowedAdditionalProperty(_)
        )
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// One reported violation.
///
/// Field violations carry the property key and the offending value.
/// Structural violations carry the key of the container (empty at the root)
/// and the container itself.
///
/// On the wire a violation is the per-check result object
/// `{key, value, success, error}` with two extra fields: `path` (the dotted
/// location, which `key` alone cannot give for nested or item values) and
/// `code` (the stable machine name of the kind).
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Property name, or the container's name for structural violations.
    pub key: String,

    /// Dotted / indexed location, e.g. `address.zip` or `tags[2]`.
    /// Empty at the root.
    pub path: String,

    /// The value that was checked.
    pub value: Value,

    /// The rule that was broken.
    pub kind: ViolationKind,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(
        key: impl Into<String>,
        path: impl Into<String>,
        value: Value,
        kind: ViolationKind,
    ) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            value,
            kind,
        }
    }

    /// User-facing message, e.g. `"Value too small"`.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// True for container-level violations.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        self.kind.is_structural()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.kind.code(), self.kind)
        } else {
            write!(f, "[{}] {}: {}", self.path, self.kind.code(), self.kind)
        }
    }
}

/// Serializes to `{key, path, value, success: false, error, code}`.
///
/// `path` and `code` extend the result shape; the other four fields keep
/// their result meaning.
impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Violation", 6)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("success", &false)?;
        state.serialize_field("error", &self.kind.to_string())?;
        state.serialize_field("code", self.kind.code())?;
        state.end()
    }
}
