//! Views of a JSON value used by the field validators.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

// ============================================================================
// VALUE TYPE
// ============================================================================

/// The value types a `type` constraint can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Text.
    String,
    /// Any finite JSON number.
    Number,
    /// `true` or `false`.
    Boolean,
    /// A plain key/value object.
    Object,
    /// An ordered list.
    Array,
}

impl ValueType {
    /// Returns the runtime type of `value`, or `None` for `null`.
    #[must_use]
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(Self::Boolean),
            Value::Number(_) => Some(Self::Number),
            Value::String(_) => Some(Self::String),
            Value::Array(_) => Some(Self::Array),
            Value::Object(_) => Some(Self::Object),
        }
    }

    /// Returns true if `value` is of this type.
    ///
    /// Numbers must also be representable as a non-NaN `f64`.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.as_f64().is_some_and(|n| !n.is_nan()),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
        }
    }

    /// The schema spelling of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            _ => Err(()),
        }
    }
}

/// JSON type name of any value, `null` included.
pub(crate) fn type_name(value: &Value) -> &'static str {
    ValueType::of(value).map_or("null", ValueType::as_str)
}

// ============================================================================
// VIEWS
// ============================================================================

/// The string form that format and pattern checks run against.
///
/// Strings are used verbatim; every other value uses its compact JSON text.
pub(crate) fn string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Length as seen by `minLength` / `maxLength`.
///
/// Arrays and objects count their entries; scalars count the characters of
/// their string form.
pub(crate) fn length_of(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(fields) => fields.len(),
        other => string_form(other).chars().count(),
    }
}

/// Numeric view used by `minValue` / `maxValue`.
///
/// Numbers and numeric strings have one. Values without one fail any range
/// bound.
pub(crate) fn numeric_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// A value counts as present unless it is `null`.
#[inline]
pub(crate) fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Falsy sample elements are dropped before array items are inferred.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n == 0.0 || n.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
