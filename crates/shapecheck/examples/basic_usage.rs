//! Basic usage example for shapecheck

use serde_json::json;
use shapecheck::{Schema, Validator};

fn main() -> Result<(), shapecheck::Error> {
    // Diagnostics are `tracing` events; print them.
    tracing_subscriber::fmt().init();

    let validator = Validator::default();

    let schema: Schema = serde_json::from_value(json!({
        "properties": {
            "name": { "type": "string", "minLength": 1 },
            "phone": { "type": "number", "minValue": 1000 },
            "nickname": null,
            "required": ["name", "phone"]
        }
    }))?;

    let report = validator.test(&schema, &json!({ "name": "Ada", "phone": 999, "nickname": "ada" }))?;
    println!("{report}");

    // Infer a schema from a known-good document, then check a drifted one.
    let sample = json!({ "id": 1, "tags": ["a", "b"], "owner": { "email": "ada@example.com" } });
    let inferred = validator.schema_from(&sample)?;
    println!("{}", serde_json::to_string_pretty(&inferred)?);

    let drifted = json!({ "id": "1", "tags": ["a", 2], "owner": {}, "extra": true });
    let report = validator.test(&inferred, &drifted)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
