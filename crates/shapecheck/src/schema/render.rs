//! Rendering back to the declarative form.

use serde_json::{Map, Value, json};

use super::{ObjectSchema, PropertySchema, SchemaNode};

pub(super) fn root(root: &ObjectSchema) -> Value {
    let mut properties = constraints(&root.constraints);
    children(root, &mut properties);

    let mut fields = Map::new();
    fields.insert("properties".into(), Value::Object(properties));
    fields.insert("required".into(), json!(root.required));
    fields.insert(
        "additionalProperties".into(),
        Value::Bool(root.additional_properties),
    );
    Value::Object(fields)
}

fn node(node: &SchemaNode) -> Value {
    match node {
        SchemaNode::Undeclared => Value::Null,
        SchemaNode::Leaf(leaf) => Value::Object(constraints(leaf)),
        SchemaNode::Object(object) => {
            let mut fields = constraints(&object.constraints);
            children(object, &mut fields);
            if !object.required.is_empty() {
                fields.insert("required".into(), json!(object.required));
            }
            // Always written so the node reads back as an object level.
            fields.insert(
                "additionalProperties".into(),
                Value::Bool(object.additional_properties),
            );
            Value::Object(fields)
        }
    }
}

fn children(object: &ObjectSchema, fields: &mut Map<String, Value>) {
    for (name, child) in &object.properties {
        fields.insert(name.clone(), node(child));
    }
}

fn constraints(schema: &PropertySchema) -> Map<String, Value> {
    let mut fields = Map::new();
    if let Some(ty) = &schema.r#type {
        fields.insert("type".into(), json!(ty.expected.as_str()));
    }
    if let Some(format) = &schema.format {
        fields.insert("format".into(), json!(format.format.as_str()));
    }
    if let Some(min) = &schema.min_length {
        fields.insert("minLength".into(), json!(min.min));
    }
    if let Some(max) = &schema.max_length {
        fields.insert("maxLength".into(), json!(max.max));
    }
    if let Some(min) = &schema.min_value {
        fields.insert("minValue".into(), number(min.min));
    }
    if let Some(max) = &schema.max_value {
        fields.insert("maxValue".into(), number(max.max));
    }
    if let Some(pattern) = &schema.pattern {
        fields.insert("matchesPattern".into(), json!(pattern.as_str()));
    }
    if let Some(items) = &schema.items {
        fields.insert("items".into(), node(items));
    }
    fields
}

/// Integral bounds are written without a fractional part.
fn number(n: f64) -> Value {
    const EXACT: f64 = 9_007_199_254_740_992.0;
    if n.fract() == 0.0 && n.abs() < EXACT {
        json!(n as i64)
    } else {
        json!(n)
    }
}
