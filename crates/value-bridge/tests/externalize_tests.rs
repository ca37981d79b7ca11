//! Tests for typed value → JSON conversion.
//!
//! Externalizing is lenient: failed children are dropped and reported, their
//! siblings survive.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::json;
use value_bridge::{
    externalize, Context, ConverterConfig, DiagnosticKind, LogLevel, NoopLogger, RecordingLogger,
    TypedValue, ValueType,
};

fn ctx() -> Context<'static> {
    static LOGGER: NoopLogger = NoopLogger;
    Context::new(&LOGGER)
}

fn string_list(items: &[&str]) -> TypedValue {
    TypedValue::list(
        ValueType::String,
        items.iter().map(|s| TypedValue::from(*s)).collect(),
    )
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn null_is_absent_without_diagnostics() {
    let (out, diags) = externalize(&ctx(), &TypedValue::Null);
    assert_eq!(out, None);
    assert!(diags.is_empty());
}

#[test]
fn unknown_is_absent_without_diagnostics() {
    let (out, diags) = externalize(&ctx(), &TypedValue::Unknown);
    assert_eq!(out, None);
    assert!(diags.is_empty());
}

#[test]
fn bool_and_string_copy_directly() {
    assert_eq!(externalize(&ctx(), &TypedValue::Bool(true)).0, Some(json!(true)));
    assert_eq!(
        externalize(&ctx(), &TypedValue::from("hello")).0,
        Some(json!("hello"))
    );
}

#[test]
fn number_becomes_double() {
    let (out, diags) = externalize(&ctx(), &TypedValue::number(3));
    assert!(diags.is_empty());
    assert_eq!(out, Some(json!(3.0)));

    let half: BigDecimal = "0.5".parse().unwrap();
    assert_eq!(externalize(&ctx(), &TypedValue::Number(half)).0, Some(json!(0.5)));
}

#[test]
fn high_precision_number_narrows_silently() {
    let precise: BigDecimal = "12345678901234567890.123456789".parse().unwrap();
    let (out, diags) = externalize(&ctx(), &TypedValue::Number(precise));
    assert!(diags.is_empty(), "precision loss is not diagnosed");
    let f = out.unwrap().as_f64().unwrap();
    assert!((f - 12345678901234567890.0).abs() < 1e5);
}

#[test]
fn large_exponents_become_the_nearest_double() {
    for text in [
        "1e100",
        "1e200",
        "1e300",
        "-1e300",
        "1.7976931348623157e308",
        "2.2250738585072014e-308",
        "5e-324",
        "123456789.987654321",
        "0.1",
    ] {
        let n: BigDecimal = text.parse().unwrap();
        let (out, diags) = externalize(&ctx(), &TypedValue::Number(n));
        assert!(diags.is_empty(), "{}: {:?}", text, diags);
        let nearest: f64 = text.parse().unwrap();
        assert_eq!(out.and_then(|v| v.as_f64()), Some(nearest), "{}", text);
    }
}

#[test]
fn one_e_three_hundred_round_trips_exactly() {
    let n: BigDecimal = "1e300".parse().unwrap();
    let (out, _) = externalize(&ctx(), &TypedValue::Number(n));
    assert_eq!(out, Some(json!(1e300)));
}

#[test]
fn largest_finite_double_is_not_reported() {
    let max = BigDecimal::from_str(&f64::MAX.to_string()).unwrap();
    let (out, diags) = externalize(&ctx(), &TypedValue::Number(max));
    assert!(diags.is_empty());
    assert_eq!(out.and_then(|v| v.as_f64()), Some(f64::MAX));
}

#[test]
fn number_beyond_double_range_is_reported() {
    for text in ["1e400", "2e308", "-2e308"] {
        let huge: BigDecimal = text.parse().unwrap();
        let (out, diags) = externalize(&ctx(), &TypedValue::Number(huge));
        assert_eq!(out, None, "{}", text);
        assert_eq!(diags.error_count(), 1, "{}", text);
        assert!(matches!(
            diags.iter().next().unwrap().kind,
            DiagnosticKind::NumberNotRepresentable { .. }
        ));
    }
}

// ============================================================================
// Unsupported shapes
// ============================================================================

#[test]
fn list_at_root_is_unsupported_shape() {
    let (out, diags) = externalize(&ctx(), &string_list(&["a"]));
    assert_eq!(out, None);
    assert_eq!(diags.len(), 1);
    let d = diags.iter().next().unwrap();
    assert!(d.path.is_root());
    assert_eq!(
        d.kind,
        DiagnosticKind::UnsupportedShape {
            type_name: "list<string>".to_string()
        }
    );
}

#[test]
fn int64_is_unsupported_shape() {
    let (out, diags) = externalize(&ctx(), &TypedValue::Int64(7));
    assert_eq!(out, None);
    assert!(diags.has_error());
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn object_maps_every_key() {
    let value = TypedValue::object([
        ("name", TypedValue::from("web")),
        ("enabled", TypedValue::Bool(false)),
        ("weight", TypedValue::number(2)),
    ]);
    let (out, diags) = externalize(&ctx(), &value);
    assert!(diags.is_empty());
    assert_eq!(
        out,
        Some(json!({"name": "web", "enabled": false, "weight": 2.0}))
    );
}

#[test]
fn null_attribute_keeps_its_key() {
    let value = TypedValue::object([
        ("a", TypedValue::Null),
        ("b", TypedValue::Unknown),
        ("c", TypedValue::from("x")),
    ]);
    let (out, diags) = externalize(&ctx(), &value);
    assert!(diags.is_empty());
    assert_eq!(out, Some(json!({"a": null, "b": null, "c": "x"})));
}

#[test]
fn object_drops_failed_key_and_keeps_siblings() {
    let value = TypedValue::object([
        ("good", TypedValue::from("kept")),
        ("bad", string_list(&["x"])),
        ("also_good", TypedValue::Bool(true)),
    ]);
    let (out, diags) = externalize(&ctx(), &value);

    assert_eq!(out, Some(json!({"good": "kept", "also_good": true})));
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.iter().next().unwrap().path.to_string(), "bad");
}

#[test]
fn tuple_with_one_unsupported_element_keeps_order_of_the_rest() {
    let value = TypedValue::tuple(vec![
        TypedValue::from("first"),
        string_list(&["nope"]),
        TypedValue::Bool(true),
    ]);
    let (out, diags) = externalize(&ctx(), &value);

    assert_eq!(out, Some(json!(["first", true])));
    assert_eq!(diags.len(), 1, "exactly one diagnostic");
    assert_eq!(diags.iter().next().unwrap().path.to_string(), "[1]");
}

#[test]
fn tuple_keeps_null_positions() {
    let value = TypedValue::tuple(vec![TypedValue::Null, TypedValue::from("b")]);
    let (out, _) = externalize(&ctx(), &value);
    assert_eq!(out, Some(json!([null, "b"])));
}

#[test]
fn every_independent_error_is_reported() {
    let value = TypedValue::object([
        ("a", TypedValue::Int64(1)),
        (
            "nested",
            TypedValue::object([
                ("b", string_list(&[])),
                ("ok", TypedValue::from("fine")),
            ]),
        ),
        (
            "t",
            TypedValue::tuple(vec![TypedValue::Int64(2), TypedValue::number(1)]),
        ),
    ]);
    let (out, diags) = externalize(&ctx(), &value);

    assert_eq!(diags.error_count(), 3);
    let paths: Vec<String> = diags.iter().map(|d| d.path.to_string()).collect();
    assert_eq!(paths, vec!["a", "nested.b", "t[0]"]);
    assert_eq!(
        out,
        Some(json!({"nested": {"ok": "fine"}, "t": [1.0]}))
    );
}

#[test]
fn input_tree_is_not_modified() {
    let value = TypedValue::object([("k", TypedValue::from("v"))]);
    let before = value.clone();
    let _ = externalize(&ctx(), &value);
    assert_eq!(value, before);
}

// ============================================================================
// Depth guard and logging
// ============================================================================

#[test]
fn subtree_below_depth_limit_is_dropped() {
    let ctx = ctx().with_config(ConverterConfig { max_depth: 1 });
    let value = TypedValue::object([(
        "a",
        TypedValue::object([("b", TypedValue::from("deep"))]),
    )]);
    let (out, diags) = externalize(&ctx, &value);

    assert_eq!(out, Some(json!({"a": {}})));
    assert_eq!(diags.len(), 1);
    let d = diags.iter().next().unwrap();
    assert_eq!(d.path.to_string(), "a.b");
    assert_eq!(d.kind, DiagnosticKind::DepthExceeded { limit: 1 });
}

#[test]
fn branches_are_logged_with_their_paths() {
    let logger = RecordingLogger::new();
    let ctx = Context::new(&logger);
    let value = TypedValue::object([("tags", string_list(&["x"]))]);
    let _ = externalize(&ctx, &value);

    let records = logger.records();
    assert!(logger.contains("externalize: object with 1 attributes"));
    let failure = records
        .iter()
        .find(|r| r.level == LogLevel::Warn)
        .expect("failure should be logged at warn");
    assert_eq!(failure.path.to_string(), "tags");
}
