//! Schema inference from sample documents
//!
//! The inferred schema is deliberately strict: every key seen is required,
//! no other keys are allowed at any object level, and strings must be
//! non-empty.
//!
//! | Sample value        | Inferred node                                      |
//! |---------------------|----------------------------------------------------|
//! | object              | strict object level, `type: object`                |
//! | array               | `type: array`, `items` from the first truthy element when all truthy elements share a type |
//! | string              | `type: string`, `minLength: 1`                     |
//! | number / boolean    | `type` only                                        |
//! | `null`              | no schema (diagnostic raised)                      |

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::diagnostics::{Diagnostic, Emitter};
use crate::error::{Error, Result};
use crate::foundation::ValueType;
use crate::foundation::value::{is_falsy, type_name};
use crate::schema::{ObjectSchema, PropertySchema, Schema, SchemaNode, child_path};
use crate::validators::min_length;

pub(crate) struct Inferer<'e> {
    emitter: Emitter<'e>,
    max_depth: usize,
}

impl<'e> Inferer<'e> {
    pub(crate) const fn new(emitter: Emitter<'e>, max_depth: usize) -> Self {
        Self { emitter, max_depth }
    }

    pub(crate) fn schema(&self, sample: &Value) -> Result<Schema> {
        let Value::Object(fields) = sample else {
            return Err(Error::SampleNotObject {
                found: type_name(sample),
            });
        };
        self.object(fields, "", 0).map(Schema::new)
    }

    fn object(&self, fields: &Map<String, Value>, path: &str, depth: usize) -> Result<ObjectSchema> {
        self.enter(path, depth)?;
        let mut properties = IndexMap::with_capacity(fields.len());
        for (key, value) in fields {
            let node = self.node(value, &child_path(path, key), depth)?;
            properties.insert(key.clone(), node);
        }
        Ok(ObjectSchema::strict(properties))
    }

    fn node(&self, value: &Value, path: &str, depth: usize) -> Result<SchemaNode> {
        match value {
            Value::Null => {
                self.emitter.emit(Diagnostic::UntypedNull {
                    path: path.to_string(),
                });
                Ok(SchemaNode::Undeclared)
            }
            Value::Object(fields) => {
                let mut object = self.object(fields, path, depth + 1)?;
                object.constraints = PropertySchema::typed(ValueType::Object);
                Ok(SchemaNode::Object(object))
            }
            Value::Array(elements) => self.array(elements, path, depth + 1).map(SchemaNode::Leaf),
            scalar => Ok(SchemaNode::Leaf(Self::scalar(scalar))),
        }
    }

    fn array(&self, elements: &[Value], path: &str, depth: usize) -> Result<PropertySchema> {
        self.enter(path, depth)?;
        let mut schema = PropertySchema::typed(ValueType::Array);

        let kept: Vec<&Value> = elements.iter().filter(|element| !is_falsy(element)).collect();
        let Some(first) = kept.first() else {
            return Ok(schema);
        };

        let item_type = ValueType::of(first);
        if kept.iter().all(|element| ValueType::of(element) == item_type) {
            let items = self.node(first, &format!("{path}[]"), depth)?;
            schema.items = Some(Box::new(items));
        } else {
            self.emitter.emit(Diagnostic::ArrayItemsSkipped {
                path: path.to_string(),
            });
        }
        Ok(schema)
    }

    fn scalar(value: &Value) -> PropertySchema {
        let Some(value_type) = ValueType::of(value) else {
            return PropertySchema::default();
        };
        let mut schema = PropertySchema::typed(value_type);
        if value_type == ValueType::String {
            schema.min_length = Some(min_length(1));
        }
        schema
    }

    fn enter(&self, path: &str, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::DepthLimitExceeded {
                limit: self.max_depth,
                path: path.to_string(),
            });
        }
        Ok(())
    }
}
