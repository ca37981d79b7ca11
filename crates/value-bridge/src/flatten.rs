//! Flatten a typed list into delimited text for APIs that only accept flat
//! strings (e.g. `"80,443,8080"` or `"admin,ops"`).

use crate::context::Context;
use crate::diagnostics::Diagnostics;
use crate::error::DiagnosticKind;
use crate::types::{TypedValue, ValueType};

/// Join the elements of a string or int64 list with `delimiter`.
///
/// - null or unknown list → `""`, no diagnostics
/// - empty list → `""`, whatever its element type
/// - `list<string>` → elements joined verbatim
/// - `list<int64>` → elements formatted in base 10, then joined
/// - any other element type → `UnsupportedElementType`, `""`
///
/// Any failure returns `""` together with the error diagnostic; partial
/// output is never returned.
///
/// # Example
/// ```
/// use value_bridge::{flatten, Context, TypedValue, ValueType};
///
/// let ports = TypedValue::list(ValueType::Int64, vec![TypedValue::Int64(80), TypedValue::Int64(443)]);
/// let (text, diags) = flatten(&Context::default(), &ports, ",");
/// assert!(diags.is_empty());
/// assert_eq!(text, "80,443");
/// ```
pub fn flatten(ctx: &Context<'_>, sequence: &TypedValue, delimiter: &str) -> (String, Diagnostics) {
    let mut diags = Diagnostics::new();

    let (element, items) = match sequence {
        TypedValue::Null | TypedValue::Unknown => {
            ctx.info(&format!("flatten: {} list, empty text", sequence.type_name()));
            return (String::new(), diags);
        }
        TypedValue::List { element, items } => (element, items),
        other => {
            return failed(
                ctx,
                diags,
                DiagnosticKind::UnsupportedShape {
                    type_name: other.type_name(),
                },
            );
        }
    };

    if items.is_empty() {
        ctx.info("flatten: empty list");
        return (String::new(), diags);
    }

    let parts = match element {
        ValueType::String => {
            ctx.info(&format!("flatten: {} string elements", items.len()));
            collect_parts(ctx, items, &mut diags, |item| item.as_str().map(str::to_string))
        }
        ValueType::Int64 => {
            ctx.info(&format!("flatten: {} int64 elements", items.len()));
            collect_parts(ctx, items, &mut diags, |item| match item {
                TypedValue::Int64(n) => Some(n.to_string()),
                _ => None,
            })
        }
        other => {
            return failed(
                ctx,
                diags,
                DiagnosticKind::UnsupportedElementType {
                    element_type: other.to_string(),
                },
            );
        }
    };

    match parts {
        Some(parts) => (parts.join(delimiter), diags),
        None => (String::new(), diags),
    }
}

/// Render every element with `render`. Visits all elements so that every bad
/// one is reported; returns `None` if any of them was bad.
fn collect_parts<F>(
    ctx: &Context<'_>,
    items: &[TypedValue],
    diags: &mut Diagnostics,
    render: F,
) -> Option<Vec<String>>
where
    F: Fn(&TypedValue) -> Option<String>,
{
    let mut parts = Vec::with_capacity(items.len());
    let mut ok = true;
    for (i, item) in items.iter().enumerate() {
        if let Some(text) = render(item) {
            parts.push(text);
            continue;
        }
        ok = false;
        let child = ctx.index(i);
        let kind = if item.is_known() {
            DiagnosticKind::Internal(format!(
                "list element of type {} does not match the declared element type",
                item.type_name()
            ))
        } else {
            DiagnosticKind::NullElement {
                state: item.type_name(),
            }
        };
        child.warn(&format!("flatten: {}", kind));
        diags.add_error(child.path().clone(), kind);
    }
    ok.then_some(parts)
}

fn failed(ctx: &Context<'_>, mut diags: Diagnostics, kind: DiagnosticKind) -> (String, Diagnostics) {
    ctx.warn(&format!("flatten: {}", kind));
    diags.add_error(ctx.path().clone(), kind);
    (String::new(), diags)
}
