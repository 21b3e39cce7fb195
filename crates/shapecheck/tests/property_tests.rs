//! Property-based tests for shapecheck.

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use serde_json::{Map, Value, json};
use shapecheck::prelude::*;

fn quiet() -> Validator {
    Validator::new(ValidatorConfig::default().with_silent(true))
}

fn boolean() -> impl Strategy<Value = Value> {
    any::<bool>().prop_map(Value::from)
}

fn integer() -> impl Strategy<Value = Value> {
    (-1_000_000i64..1_000_000).prop_map(Value::from)
}

fn text() -> impl Strategy<Value = Value> {
    "[a-zA-Z0-9 ]{1,12}".prop_map(Value::from)
}

fn object(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    btree_map("k[a-z]{0,5}", inner, 0..4)
        .prop_map(|fields| Value::Object(fields.into_iter().collect::<Map<_, _>>()))
}

/// Documents with no null leaves, no empty strings and no type-mixed arrays.
fn document() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![boolean(), integer(), text()];
    let value = leaf.prop_recursive(3, 48, 4, |inner| {
        prop_oneof![
            object(inner.clone()),
            vec(boolean(), 0..4).prop_map(Value::from),
            vec(integer(), 0..4).prop_map(Value::from),
            vec(text(), 0..4).prop_map(Value::from),
            vec(object(inner), 0..3).prop_map(Value::from),
        ]
    });
    object(value)
}

// ============================================================================
// ROUND TRIP: test(schema_from(x), x) succeeds
// ============================================================================

proptest! {
    #[test]
    fn sample_satisfies_inferred_schema(sample in document()) {
        let validator = quiet();
        let schema = validator.schema_from(&sample).unwrap();
        let report = validator.test(&schema, &sample).unwrap();
        prop_assert!(report.success, "{}", report);
    }

    #[test]
    fn inferred_schema_survives_rendering(sample in document()) {
        let schema = quiet().schema_from(&sample).unwrap();
        let reread = Schema::from_value(&schema.to_value()).unwrap();
        prop_assert_eq!(schema, reread);
    }
}

// ============================================================================
// IDEMPOTENCY: test(s, x) == test(s, x)
// ============================================================================

proptest! {
    #[test]
    fn validation_idempotent(shape in document(), input in document()) {
        let validator = quiet();
        let schema = validator.schema_from(&shape).unwrap();
        let first = validator.test(&schema, &input).unwrap();
        let second = validator.test(&schema, &input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn success_iff_no_errors(shape in document(), input in document()) {
        let validator = quiet();
        let schema = validator.schema_from(&shape).unwrap();
        let report = validator.test(&schema, &input).unwrap();
        prop_assert_eq!(report.success, report.errors.is_empty());
    }
}

// ============================================================================
// FIELD CHECKS
// ============================================================================

proptest! {
    #[test]
    fn min_length_counts_chars(s in ".{0,20}") {
        let schema = json!({ "properties": { "s": { "minLength": 3 } } });
        let report = quiet().test_value(&schema, &json!({ "s": s })).unwrap();
        prop_assert_eq!(report.success, s.chars().count() >= 3);
    }

    #[test]
    fn min_value_on_numbers(n in -10_000i64..10_000) {
        let schema = json!({ "properties": { "n": { "type": "number", "minValue": 0 } } });
        let report = quiet().test_value(&schema, &json!({ "n": n })).unwrap();
        prop_assert_eq!(report.success, n >= 0);
    }

    #[test]
    fn numeric_format_accepts_every_integer(n in any::<i64>()) {
        let schema = json!({ "properties": { "n": { "format": "numeric" } } });
        let report = quiet().test_value(&schema, &json!({ "n": n.to_string() })).unwrap();
        prop_assert!(report.success);
    }
}
