//! Normalized schema tree
//!
//! The declarative form mixes reserved metadata keys (`required`, `type`,
//! `minLength`, ...) with child property names at the same level. It is
//! normalized once, by [`Schema::from_value`], into the tagged
//! [`SchemaNode`] tree below; the engine never looks at reserved keys again.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use shapecheck::{Schema, SchemaNode};
//!
//! let schema = Schema::from_value(&json!({
//!     "properties": {
//!         "name": { "type": "string" },
//!         "address": {
//!             "zip": { "type": "string", "format": "numeric" },
//!             "required": ["zip"]
//!         },
//!         "required": ["name"]
//!     }
//! }))?;
//!
//! assert_eq!(schema.root.required, ["name"]);
//! assert!(matches!(schema.root.properties["name"], SchemaNode::Leaf(_)));
//! assert!(matches!(schema.root.properties["address"], SchemaNode::Object(_)));
//! # Ok::<(), shapecheck::Error>(())
//! ```

mod parse;
mod render;

pub(crate) use parse::child_path;

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::foundation::{CheckResult, Validate, ValueType};
use crate::validators::{
    MatchesFormat, MatchesPattern, MaxLength, MaxValue, MinLength, MinValue, TypeOf,
};

pub use crate::validators::Format;

/// Metadata keys that are never treated as child property names.
pub const RESERVED_KEYS: [&str; 10] = [
    "required",
    "additionalProperties",
    "type",
    "format",
    "minLength",
    "maxLength",
    "minValue",
    "maxValue",
    "matchesPattern",
    "items",
];

/// Returns true if `key` is a reserved metadata key.
#[must_use]
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

// ============================================================================
// PROPERTY SCHEMA
// ============================================================================

/// Leaf-level constraints of one property.
///
/// Every constraint is optional; absent constraints accept everything. The
/// field order is the check order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySchema {
    /// `type`
    pub r#type: Option<TypeOf>,
    /// `format`
    pub format: Option<MatchesFormat>,
    /// `minLength`
    pub min_length: Option<MinLength>,
    /// `maxLength`
    pub max_length: Option<MaxLength>,
    /// `minValue`
    pub min_value: Option<MinValue>,
    /// `maxValue`
    pub max_value: Option<MaxValue>,
    /// `matchesPattern`
    pub pattern: Option<MatchesPattern>,
    /// `items`, applied to every element when the value is an array.
    pub items: Option<Box<SchemaNode>>,
}

impl PropertySchema {
    /// A schema constraining only the value type.
    #[must_use]
    pub fn typed(value_type: ValueType) -> Self {
        Self {
            r#type: Some(TypeOf::new(value_type)),
            ..Self::default()
        }
    }

    /// Runs the checks in order, stopping at the first failure.
    pub fn check(&self, value: &Value) -> CheckResult {
        self.r#type.validate(value)?;
        self.format.validate(value)?;
        self.min_length.validate(value)?;
        self.max_length.validate(value)?;
        self.min_value.validate(value)?;
        self.max_value.validate(value)?;
        self.pattern.validate(value)
    }

    /// True if no constraint is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// OBJECT SCHEMA
// ============================================================================

/// A nested object level: its own leaf constraints plus child properties
/// and container rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    /// Constraints on the object value itself (e.g. `type: object`).
    pub constraints: PropertySchema,
    /// Declared children, in declaration order.
    pub properties: IndexMap<String, SchemaNode>,
    /// Keys that must exist at this level, in declaration order.
    pub required: Vec<String>,
    /// Whether keys not declared in `properties` are allowed.
    pub additional_properties: bool,
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self {
            constraints: PropertySchema::default(),
            properties: IndexMap::new(),
            required: Vec::new(),
            additional_properties: true,
        }
    }
}

impl ObjectSchema {
    /// The strict form produced by inference: all listed keys required and
    /// nothing else allowed.
    #[must_use]
    pub fn strict(properties: IndexMap<String, SchemaNode>) -> Self {
        Self {
            required: properties.keys().cloned().collect(),
            properties,
            additional_properties: false,
            ..Self::default()
        }
    }

    /// Adds or replaces a child property.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.properties.insert(name.into(), node);
        self
    }

    /// Appends required key names, skipping ones already listed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.required.contains(&name) {
                self.required.push(name);
            }
        }
        self
    }

    /// Sets whether undeclared keys are allowed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = allowed;
        self
    }
}

// ============================================================================
// SCHEMA NODE
// ============================================================================

/// One entry of a schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A property with leaf constraints only.
    Leaf(PropertySchema),
    /// A nested object level.
    Object(ObjectSchema),
    /// A property named without any schema (`null` in the declarative
    /// form). Its checks pass vacuously.
    Undeclared,
}

impl SchemaNode {
    /// Leaf constraints of this node, if it has any schema at all.
    #[must_use]
    pub fn constraints(&self) -> Option<&PropertySchema> {
        match self {
            Self::Leaf(constraints) => Some(constraints),
            Self::Object(object) => Some(&object.constraints),
            Self::Undeclared => None,
        }
    }
}

impl From<PropertySchema> for SchemaNode {
    fn from(constraints: PropertySchema) -> Self {
        Self::Leaf(constraints)
    }
}

impl From<ObjectSchema> for SchemaNode {
    fn from(object: ObjectSchema) -> Self {
        Self::Object(object)
    }
}

// ============================================================================
// ROOT SCHEMA
// ============================================================================

/// A root schema: `{ properties, required?, additionalProperties? }`.
///
/// Deserializing normalizes the declarative form; serializing renders it
/// back, with root `required` / `additionalProperties` beside `properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Schema {
    /// The root object level.
    pub root: ObjectSchema,
}

impl Schema {
    /// Wraps a root object level.
    #[must_use]
    pub fn new(root: ObjectSchema) -> Self {
        Self { root }
    }

    /// Normalizes a declarative schema.
    ///
    /// Root `required` and `additionalProperties` may sit beside
    /// `properties` or inside it. Both places are honoured: required lists
    /// are merged, and an outer `additionalProperties` wins.
    pub fn from_value(raw: &Value) -> Result<Self> {
        parse::root(raw).map(Self::new)
    }

    /// Renders the declarative form.
    #[must_use]
    pub fn to_value(&self) -> Value {
        render::root(&self.root)
    }
}

impl TryFrom<Value> for Schema {
    type Error = Error;

    fn try_from(raw: Value) -> Result<Self> {
        Self::from_value(&raw)
    }
}

impl TryFrom<&Value> for Schema {
    type Error = Error;

    fn try_from(raw: &Value) -> Result<Self> {
        Self::from_value(raw)
    }
}

impl From<Schema> for Value {
    fn from(schema: Schema) -> Self {
        schema.to_value()
    }
}

impl FromStr for Schema {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(s)?;
        Self::from_value(&raw)
    }
}
