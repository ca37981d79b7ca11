//! Typed value → generic JSON tree.
//!
//! Externalizing is lenient: a child that fails is reported and dropped, and
//! its siblings are still returned. Objects lose the failed key, tuples lose
//! the failed position (the survivors keep their relative order).
//!
//! | Typed value          | JSON                                  |
//! |----------------------|---------------------------------------|
//! | null, unknown        | absent (`null` when inside an object) |
//! | bool, string         | bool, string                          |
//! | number               | nearest `f64`                         |
//! | tuple                | array                                 |
//! | object               | object                                |
//! | anything else        | `UnsupportedShape` diagnostic         |
//!
//! Narrowing numbers to `f64` is silent: precision beyond a double is lost
//! without a diagnostic. Only numbers with no finite double at all are
//! reported.

use bigdecimal::BigDecimal;
use serde_json::{Map, Number, Value};

use crate::context::Context;
use crate::diagnostics::Diagnostics;
use crate::error::DiagnosticKind;
use crate::types::TypedValue;

/// Result of externalizing one node.
enum Externalized {
    /// Null or unknown: succeeded, but there is nothing to emit.
    Absent,
    Value(Value),
    /// Diagnostics were recorded; emit nothing for this subtree.
    Failed,
}

/// Convert a typed value into a generic JSON tree.
///
/// Returns `None` when the value is null or unknown, or when the root itself
/// failed. Every problem found anywhere in the tree is in the returned
/// [`Diagnostics`].
///
/// # Example
/// ```
/// use value_bridge::{externalize, Context, TypedValue};
///
/// let value = TypedValue::object([("name", TypedValue::from("web")), ("enabled", true.into())]);
/// let (json, diags) = externalize(&Context::default(), &value);
/// assert!(!diags.has_error());
/// assert_eq!(json, Some(serde_json::json!({"enabled": true, "name": "web"})));
/// ```
pub fn externalize(ctx: &Context<'_>, value: &TypedValue) -> (Option<Value>, Diagnostics) {
    let mut diags = Diagnostics::new();
    let out = match externalize_node(ctx, value, &mut diags) {
        Externalized::Value(v) => Some(v),
        Externalized::Absent | Externalized::Failed => None,
    };
    (out, diags)
}

fn externalize_node(ctx: &Context<'_>, value: &TypedValue, diags: &mut Diagnostics) -> Externalized {
    if ctx.depth_exceeded() {
        return fail(
            ctx,
            diags,
            DiagnosticKind::DepthExceeded {
                limit: ctx.config().max_depth,
            },
        );
    }

    match value {
        TypedValue::Null | TypedValue::Unknown => {
            ctx.info(&format!("externalize: {} value, nothing to emit", value.type_name()));
            Externalized::Absent
        }
        TypedValue::Bool(b) => {
            ctx.info("externalize: bool");
            Externalized::Value(Value::Bool(*b))
        }
        TypedValue::String(s) => {
            ctx.info("externalize: string");
            Externalized::Value(Value::String(s.clone()))
        }
        TypedValue::Number(n) => {
            ctx.info("externalize: number");
            match number_to_json(n) {
                Some(number) => Externalized::Value(Value::Number(number)),
                None => fail(
                    ctx,
                    diags,
                    DiagnosticKind::NumberNotRepresentable {
                        value: n.to_string(),
                    },
                ),
            }
        }
        TypedValue::Object(attributes) => {
            ctx.info(&format!(
                "externalize: object with {} attributes",
                attributes.len()
            ));
            let mut map = Map::with_capacity(attributes.len());
            for (key, child) in attributes {
                match externalize_node(&ctx.key(key), child, diags) {
                    Externalized::Value(v) => {
                        map.insert(key.clone(), v);
                    }
                    Externalized::Absent => {
                        map.insert(key.clone(), Value::Null);
                    }
                    Externalized::Failed => {}
                }
            }
            Externalized::Value(Value::Object(map))
        }
        TypedValue::Tuple(items) => {
            ctx.info(&format!("externalize: tuple with {} elements", items.len()));
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match externalize_node(&ctx.index(i), item, diags) {
                    Externalized::Value(v) => out.push(v),
                    Externalized::Absent => out.push(Value::Null),
                    Externalized::Failed => {}
                }
            }
            Externalized::Value(Value::Array(out))
        }
        TypedValue::Int64(_) | TypedValue::List { .. } => fail(
            ctx,
            diags,
            DiagnosticKind::UnsupportedShape {
                type_name: value.type_name(),
            },
        ),
    }
}

/// Nearest double, or `None` when the value overflows `f64`.
fn number_to_json(n: &BigDecimal) -> Option<Number> {
    // std's parser rounds to nearest.
    n.to_scientific_notation()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
}

fn fail(ctx: &Context<'_>, diags: &mut Diagnostics, kind: DiagnosticKind) -> Externalized {
    ctx.warn(&format!("externalize: {}", kind));
    diags.add_error(ctx.path().clone(), kind);
    Externalized::Failed
}
