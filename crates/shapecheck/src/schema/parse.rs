//! Normalization of the declarative schema form.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{Format, ObjectSchema, PropertySchema, SchemaNode, is_reserved};
use crate::error::{Error, Result};
use crate::foundation::ValueType;
use crate::foundation::value::type_name;
use crate::validators::{
    MatchesFormat, MatchesPattern, MaxLength, MaxValue, MinLength, MinValue, TypeOf,
};

/// Normalizes a root schema `{ properties, required?, additionalProperties? }`.
pub(super) fn root(raw: &Value) -> Result<ObjectSchema> {
    let Some(fields) = raw.as_object() else {
        return Err(Error::invalid_schema(
            "",
            format!("expected a root schema object, found {}", type_name(raw)),
        ));
    };
    let Some(properties) = fields.get("properties") else {
        return Err(Error::invalid_schema("", "missing 'properties'"));
    };
    let Some(properties) = properties.as_object() else {
        return Err(Error::invalid_schema(
            "properties",
            format!("expected an object, found {}", type_name(properties)),
        ));
    };

    let mut root = object(properties, "")?;
    if let Some(required) = required_keys(fields, "")? {
        root = root.with_required(required);
    }
    if let Some(allowed) = additional_properties(fields, "")? {
        root.additional_properties = allowed;
    }
    Ok(root)
}

/// Normalizes one node. `null` means "named, but no schema".
fn node(raw: &Value, path: &str) -> Result<SchemaNode> {
    match raw {
        Value::Null => Ok(SchemaNode::Undeclared),
        Value::Object(fields) => {
            let declares_object = fields.keys().any(|key| !is_reserved(key))
                || fields.contains_key("required")
                || fields.contains_key("additionalProperties");
            if declares_object {
                object(fields, path).map(SchemaNode::Object)
            } else {
                constraints(fields, path).map(SchemaNode::Leaf)
            }
        }
        other => Err(Error::invalid_schema(
            path,
            format!("expected a schema object, found {}", type_name(other)),
        )),
    }
}

fn object(fields: &Map<String, Value>, path: &str) -> Result<ObjectSchema> {
    let mut properties = IndexMap::new();
    for (key, raw) in fields.iter().filter(|(key, _)| !is_reserved(key)) {
        properties.insert(key.clone(), node(raw, &child_path(path, key))?);
    }

    Ok(ObjectSchema {
        constraints: constraints(fields, path)?,
        properties,
        required: required_keys(fields, path)?.unwrap_or_default(),
        additional_properties: additional_properties(fields, path)?.unwrap_or(true),
    })
}

fn constraints(fields: &Map<String, Value>, path: &str) -> Result<PropertySchema> {
    let r#type = match fields.get("type") {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => {
            let expected = name.parse::<ValueType>().map_err(|()| Error::UnknownType {
                path: path.to_string(),
                name: name.clone(),
            })?;
            Some(TypeOf::new(expected))
        }
        Some(other) => return Err(expected_kind(path, "type", "a string", other)),
    };

    let format = match fields.get("format") {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => {
            let format = name.parse::<Format>().map_err(|()| Error::UnknownFormat {
                path: path.to_string(),
                name: name.clone(),
            })?;
            Some(MatchesFormat::new(format))
        }
        Some(other) => return Err(expected_kind(path, "format", "a string", other)),
    };

    let pattern = match fields.get("matchesPattern") {
        None | Some(Value::Null) => None,
        Some(Value::String(source)) => {
            Some(
                MatchesPattern::new(source).map_err(|source| Error::InvalidPattern {
                    path: path.to_string(),
                    source,
                })?,
            )
        }
        Some(other) => return Err(expected_kind(path, "matchesPattern", "a string", other)),
    };

    let items = match fields.get("items") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(Box::new(node(raw, &format!("{path}[]"))?)),
    };

    Ok(PropertySchema {
        r#type,
        format,
        min_length: length(fields, path, "minLength")?.map(MinLength::new),
        max_length: length(fields, path, "maxLength")?.map(MaxLength::new),
        min_value: bound(fields, path, "minValue")?.map(MinValue::new),
        max_value: bound(fields, path, "maxValue")?.map(MaxValue::new),
        pattern,
        items,
    })
}

fn length(fields: &Map<String, Value>, path: &str, key: &str) -> Result<Option<usize>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => raw
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| expected_kind(path, key, "a non-negative integer", raw)),
    }
}

fn bound(fields: &Map<String, Value>, path: &str, key: &str) -> Result<Option<f64>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => raw
            .as_f64()
            .map(Some)
            .ok_or_else(|| expected_kind(path, key, "a number", raw)),
    }
}

fn required_keys(fields: &Map<String, Value>, path: &str) -> Result<Option<Vec<String>>> {
    let Some(raw) = fields.get("required") else {
        return Ok(None);
    };
    let Some(names) = raw.as_array() else {
        return Err(expected_kind(path, "required", "an array of strings", raw));
    };
    names
        .iter()
        .map(|name| {
            name.as_str()
                .map(str::to_string)
                .ok_or_else(|| expected_kind(path, "required", "an array of strings", raw))
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn additional_properties(fields: &Map<String, Value>, path: &str) -> Result<Option<bool>> {
    match fields.get("additionalProperties") {
        None => Ok(None),
        Some(Value::Bool(allowed)) => Ok(Some(*allowed)),
        Some(other) => Err(expected_kind(path, "additionalProperties", "a boolean", other)),
    }
}

fn expected_kind(path: &str, key: &str, expected: &str, found: &Value) -> Error {
    Error::invalid_schema(
        path,
        format!("'{key}' must be {expected}, found {}", type_name(found)),
    )
}

pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
