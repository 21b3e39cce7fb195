//! End-to-end validation through the public facade.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use shapecheck::prelude::*;

fn quiet() -> Validator {
    Validator::new(ValidatorConfig::default().with_silent(true))
}

fn check(schema: &Value, input: &Value) -> ValidationReport {
    quiet().test_value(schema, input).unwrap()
}

// ============================================================================
// REQUIRED AND ADDITIONAL KEYS
// ============================================================================

#[test]
fn missing_required_keys_are_listed_together() {
    let report = check(
        &json!({
            "properties": {
                "a": { "type": "string" },
                "b": { "type": "string" },
                "required": ["a", "b"]
            }
        }),
        &json!({}),
    );

    assert!(!report.success);
    assert_eq!(
        serde_json::to_value(&report.errors[0]).unwrap(),
        json!({
            "key": "",
            "path": "",
            "value": {},
            "success": false,
            "error": "Missing the required key: 'a, b'!",
            "code": "missing_required_key"
        })
    );
}

#[test]
fn null_value_still_counts_as_an_own_key() {
    let report = check(
        &json!({ "properties": { "a": { "type": "string" }, "required": ["a"] } }),
        &json!({ "a": null }),
    );
    assert!(report.success);
}

#[test]
fn disallowed_additional_properties_are_listed_in_input_order() {
    let report = check(
        &json!({
            "properties": { "a": { "type": "string" } },
            "additionalProperties": false
        }),
        &json!({ "y": 1, "a": "ok", "x": 2 }),
    );
    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].message(),
        "Has additional disallowed properties: 'y, x'!"
    );
}

#[test]
fn additional_properties_default_to_allowed() {
    let report = check(
        &json!({ "properties": { "a": { "type": "string" } } }),
        &json!({ "a": "ok", "extra": true }),
    );
    assert!(report.success);
}

// ============================================================================
// FIELD CONSTRAINTS
// ============================================================================

#[test]
fn value_too_small() {
    let report = check(
        &json!({ "properties": { "phone": { "type": "number", "minValue": 1000 } } }),
        &json!({ "phone": 999 }),
    );
    assert!(!report.success);
    assert_eq!(
        serde_json::to_value(&report.errors).unwrap(),
        json!([{
            "key": "phone",
            "path": "phone",
            "value": 999,
            "success": false,
            "error": "Value too small",
            "code": "value_too_small"
        }])
    );
}

#[rstest]
#[case::date_ok(json!({ "format": "date" }), json!("2024-01-01"), None)]
#[case::date_compact(json!({ "format": "date" }), json!("20240101"), Some("Invalid format"))]
#[case::type_first(json!({ "type": "string", "minLength": 3 }), json!(12), Some("Invalid type"))]
#[case::too_long(json!({ "maxLength": 3 }), json!("abcd"), Some("Length too long"))]
#[case::too_large(json!({ "maxValue": 10 }), json!(10.5), Some("Value too large"))]
#[case::numeric_string_range(json!({ "minValue": 5 }), json!("4"), Some("Value too small"))]
#[case::text_below_min(json!({ "minValue": 18 }), json!("young"), Some("Value too small"))]
#[case::boolean_above_max(json!({ "maxValue": 99 }), json!(true), Some("Value too large"))]
#[case::pattern(json!({ "matchesPattern": "^[A-Z]{2}$" }), json!("abc"), Some("Pattern does not match"))]
#[case::email(json!({ "format": "email" }), json!("ada@example.com"), None)]
#[case::hex(json!({ "format": "hexColor" }), json!("#12abEF"), None)]
#[case::array_length(json!({ "type": "array", "minLength": 2 }), json!([1]), Some("Length too short"))]
fn single_field(#[case] field: Value, #[case] value: Value, #[case] expected: Option<&str>) {
    let report = check(
        &json!({ "properties": { "field": field } }),
        &json!({ "field": value }),
    );
    let messages: Vec<String> = report.iter().map(Violation::message).collect();
    assert_eq!(messages, expected.into_iter().map(String::from).collect::<Vec<_>>());
}

#[test]
fn non_numeric_value_fails_the_lower_bound_first() {
    let report = check(
        &json!({ "properties": { "age": { "minValue": 18, "maxValue": 99 } } }),
        &json!({ "age": "young" }),
    );
    assert!(!report.success);
    assert_eq!(report.len(), 1);
    assert_eq!(report.errors[0].kind, ViolationKind::ValueTooSmall);
    assert_eq!(report.errors[0].value, json!("young"));
}

#[rstest]
#[case::array(json!([1, 2]))]
#[case::array_like(json!({ "0": "a", "length": 1 }))]
fn type_checks_are_exact(#[case] value: Value) {
    let expected = if value.is_array() { "object" } else { "array" };
    let report = check(
        &json!({ "properties": { "field": { "type": expected } } }),
        &json!({ "field": value }),
    );
    assert_eq!(report.errors[0].kind, ViolationKind::InvalidType);
}

// ============================================================================
// ORDERING, NESTING AND ITEMS
// ============================================================================

#[test]
fn structural_errors_precede_field_errors() {
    let report = check(
        &json!({
            "properties": {
                "name": { "type": "string" },
                "age": { "type": "number" },
                "required": ["name", "email"]
            },
            "additionalProperties": false
        }),
        &json!({ "name": 5, "age": "x", "nick": "n" }),
    );

    let codes: Vec<&str> = report.iter().map(Violation::code).collect();
    assert_eq!(
        codes,
        [
            "missing_required_key",
            "disallowed_additional_property",
            "invalid_type",
            "invalid_type",
        ]
    );
    assert_eq!(report.errors[2].key, "name");
    assert_eq!(report.errors[3].key, "age");
}

#[test]
fn nested_levels_report_their_own_key_and_path() {
    let report = check(
        &json!({
            "properties": {
                "address": {
                    "type": "object",
                    "zip": { "type": "string", "format": "numeric" },
                    "required": ["zip", "city"],
                    "additionalProperties": false
                }
            }
        }),
        &json!({ "address": { "zip": "12a", "country": "NZ" } }),
    );

    let summary: Vec<(String, String, &str)> = report
        .iter()
        .map(|v| (v.key.clone(), v.path.clone(), v.code()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("address".into(), "address".into(), "missing_required_key"),
            (
                "address".into(),
                "address".into(),
                "disallowed_additional_property"
            ),
            ("zip".into(), "address.zip".into(), "invalid_format"),
        ]
    );
}

#[test]
fn items_are_checked_per_element() {
    let report = check(
        &json!({
            "properties": {
                "tags": { "type": "array", "items": { "type": "string", "minLength": 2 } }
            }
        }),
        &json!({ "tags": ["ok", "x", 3] }),
    );

    let failures: Vec<(&str, &str)> = report
        .iter()
        .map(|v| (v.path.as_str(), v.code()))
        .collect();
    assert_eq!(
        failures,
        [("tags[1]", "length_too_short"), ("tags[2]", "invalid_type")]
    );
    assert_eq!(report.errors[1].value, json!(3));
}

#[test]
fn nested_schema_is_skipped_for_non_object_values() {
    let report = check(
        &json!({
            "properties": {
                "address": { "zip": { "type": "string" }, "required": ["zip"] }
            }
        }),
        &json!({ "address": "not an object" }),
    );
    assert!(report.success);
}

// ============================================================================
// FACADE BEHAVIOUR
// ============================================================================

#[test]
fn null_input_is_rejected() {
    let err = quiet()
        .test_value(&json!({ "properties": {} }), &Value::Null)
        .unwrap_err();
    assert!(matches!(err, Error::MissingInput));
}

#[test]
fn malformed_schema_is_rejected() {
    let err = quiet()
        .test_value(&json!({ "properties": { "a": { "type": "date" } } }), &json!({}))
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown type 'date' at 'a'");
}

#[test]
fn repeated_calls_are_identical() {
    let schema: Schema = serde_json::from_value(json!({
        "properties": {
            "a": { "type": "number", "maxValue": 1 },
            "required": ["a", "b"]
        }
    }))
    .unwrap();
    let input = json!({ "a": 2 });
    let validator = quiet();
    assert_eq!(
        validator.test(&schema, &input).unwrap(),
        validator.test(&schema, &input).unwrap()
    );
}

#[test]
fn free_functions_use_defaults() {
    let schema: Schema = r#"{ "properties": { "n": { "type": "number" } } }"#
        .parse()
        .unwrap();
    assert!(shapecheck::test(&schema, &json!({ "n": 1 })).unwrap().success);
}

#[test]
fn depth_ceiling_is_configurable() {
    let validator = Validator::new(
        ValidatorConfig::default()
            .with_silent(true)
            .with_max_depth(1),
    );
    let schema = json!({ "properties": { "a": { "b": { "c": { "type": "string" } } } } });
    let err = validator
        .test_value(&schema, &json!({ "a": { "b": { "c": "x" } } }))
        .unwrap_err();
    assert!(matches!(err, Error::DepthLimitExceeded { limit: 1, .. }));
}
