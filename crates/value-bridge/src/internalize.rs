//! Generic JSON tree → typed value, guided by a shape hint.
//!
//! Internalizing is atomic per container: every child of an object or array
//! is visited so that all problems are reported, but if any of them failed the
//! container produces no value at all.
//!
//! The optional hint is a previously known typed value for the same location.
//! It is only read, never modified, and serves two purposes:
//!
//! - **Pruning**: when the hint is an object, JSON keys it does not declare
//!   are dropped silently (API responses routinely carry fields the typed
//!   model does not track).
//! - **Recovering absent slots**: a JSON `null` inside a container becomes
//!   `Unknown` if the hint says that slot was unknown, otherwise `Null`.

use bigdecimal::BigDecimal;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::context::Context;
use crate::diagnostics::Diagnostics;
use crate::error::DiagnosticKind;
use crate::types::TypedValue;

enum Internalized {
    /// JSON null: skipped without a diagnostic.
    Absent,
    Value(TypedValue),
    Failed,
}

/// Convert a generic JSON tree into a typed value.
///
/// Returns `None` for a top-level `null` (with no diagnostics) and for any
/// tree whose root failed (with at least one error diagnostic).
///
/// # Example
/// ```
/// use serde_json::json;
/// use value_bridge::{internalize, Context, TypedValue};
///
/// let hint = TypedValue::object([("foo", TypedValue::Null), ("bar", TypedValue::Null)]);
/// let input = json!({"foo": "a", "bar": "b", "extra": "c"});
/// let (value, diags) = internalize(&Context::default(), &input, Some(&hint));
/// assert!(diags.is_empty());
/// assert_eq!(value.unwrap().get("extra"), None);
/// ```
pub fn internalize(
    ctx: &Context<'_>,
    value: &Value,
    hint: Option<&TypedValue>,
) -> (Option<TypedValue>, Diagnostics) {
    let mut diags = Diagnostics::new();
    let out = match internalize_node(ctx, value, hint, &mut diags) {
        Internalized::Value(v) => Some(v),
        Internalized::Absent | Internalized::Failed => None,
    };
    (out, diags)
}

fn internalize_node(
    ctx: &Context<'_>,
    value: &Value,
    hint: Option<&TypedValue>,
    diags: &mut Diagnostics,
) -> Internalized {
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
        Value::Null => {
            ctx.info("internalize: null, skipped");
            Internalized::Absent
        }
        Value::Bool(b) => {
            ctx.info("internalize: bool");
            Internalized::Value(TypedValue::Bool(*b))
        }
        Value::String(s) => {
            ctx.info("internalize: string");
            Internalized::Value(TypedValue::String(s.clone()))
        }
        Value::Number(n) => {
            ctx.info("internalize: number");
            match n.as_f64().and_then(double_to_decimal) {
                Some(d) => Internalized::Value(TypedValue::Number(d)),
                None => fail(
                    ctx,
                    diags,
                    DiagnosticKind::UnsupportedValue {
                        observed: format!("number {}", n),
                    },
                ),
            }
        }
        Value::Array(items) => {
            ctx.info(&format!("internalize: array with {} elements", items.len()));
            let mut children = Diagnostics::new();
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let child_hint = hint.and_then(|h| h.element(i));
                match internalize_node(&ctx.index(i), item, child_hint, &mut children) {
                    Internalized::Value(v) => out.push(v),
                    Internalized::Absent => out.push(absent_slot(child_hint)),
                    Internalized::Failed => {}
                }
            }
            finish_container(ctx, diags, children, TypedValue::Tuple(out))
        }
        Value::Object(map) => {
            ctx.info(&format!("internalize: object with {} keys", map.len()));
            let declared = match hint {
                Some(TypedValue::Object(attributes)) => Some(attributes),
                _ => None,
            };
            let mut children = Diagnostics::new();
            let mut out = BTreeMap::new();
            for (key, child) in map {
                if declared.is_some_and(|attributes| !attributes.contains_key(key)) {
                    ctx.debug(&format!("internalize: pruned undeclared key {:?}", key));
                    continue;
                }
                let child_hint = hint.and_then(|h| h.get(key));
                match internalize_node(&ctx.key(key), child, child_hint, &mut children) {
                    Internalized::Value(v) => {
                        out.insert(key.clone(), v);
                    }
                    Internalized::Absent => {
                        out.insert(key.clone(), absent_slot(child_hint));
                    }
                    Internalized::Failed => {}
                }
            }
            finish_container(ctx, diags, children, TypedValue::Object(out))
        }
    }
}

/// Apply the atomic rule: the container exists only if no child reported an error.
fn finish_container(
    ctx: &Context<'_>,
    diags: &mut Diagnostics,
    children: Diagnostics,
    container: TypedValue,
) -> Internalized {
    let failed = children.has_error();
    diags.merge(children);
    if failed {
        ctx.debug("internalize: container discarded after child errors");
        Internalized::Failed
    } else {
        Internalized::Value(container)
    }
}

fn absent_slot(hint: Option<&TypedValue>) -> TypedValue {
    match hint {
        Some(TypedValue::Unknown) => TypedValue::Unknown,
        _ => TypedValue::Null,
    }
}

/// Shortest decimal text that reads back as the same double.
fn double_to_decimal(f: f64) -> Option<BigDecimal> {
    if !f.is_finite() {
        return None;
    }
    f.to_string().parse().ok()
}

fn fail(ctx: &Context<'_>, diags: &mut Diagnostics, kind: DiagnosticKind) -> Internalized {
    ctx.warn(&format!("internalize: {}", kind));
    diags.add_error(ctx.path().clone(), kind);
    Internalized::Failed
}
