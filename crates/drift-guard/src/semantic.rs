//! Order- and whitespace-insensitive comparison of comma-separated strings.
//!
//! Some upstream APIs return list-valued text fields (`"read, write,admin"`)
//! with a different token order or spacing from one read to the next. Compared
//! as plain strings, every such read would look like drift and trigger a
//! pointless corrective write. [`SemanticString`] compares the normalized
//! forms instead.

use std::any::Any;

use value_bridge::{Context, DiagnosticKind, Diagnostics, TypedValue};

/// Split on commas, trim each token, sort the tokens, and rejoin with commas.
///
/// Duplicates are kept: `"a,a,b"` normalizes to `"a,a,b"`, not `"a,b"`.
///
/// ```
/// use drift_guard::normalize;
/// assert_eq!(normalize(" c, a ,b"), "a,b,c");
/// ```
pub fn normalize(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split(',').map(str::trim).collect();
    tokens.sort_unstable();
    tokens.join(",")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum State {
    #[default]
    Null,
    Unknown,
    Known(String),
}

/// A tri-state string whose semantic equality ignores token order and
/// whitespace around commas.
///
/// `PartialEq` stays structural; use [`SemanticString::semantic_equals`] for
/// the drift comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SemanticString {
    state: State,
}

impl SemanticString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            state: State::Known(value.into()),
        }
    }

    pub fn null() -> Self {
        Self { state: State::Null }
    }

    pub fn unknown() -> Self {
        Self {
            state: State::Unknown,
        }
    }

    pub fn is_null(&self) -> bool {
        self.state == State::Null
    }

    pub fn is_unknown(&self) -> bool {
        self.state == State::Unknown
    }

    /// The raw text, if known.
    pub fn value(&self) -> Option<&str> {
        match &self.state {
            State::Known(s) => Some(s),
            _ => None,
        }
    }

    /// Build from a typed value. Returns `None` for anything but a string,
    /// null, or unknown.
    pub fn from_typed(value: &TypedValue) -> Option<Self> {
        match value {
            TypedValue::Null => Some(Self::null()),
            TypedValue::Unknown => Some(Self::unknown()),
            TypedValue::String(s) => Some(Self::new(s.clone())),
            _ => None,
        }
    }

    pub fn to_typed(&self) -> TypedValue {
        match &self.state {
            State::Null => TypedValue::Null,
            State::Unknown => TypedValue::Unknown,
            State::Known(s) => TypedValue::String(s.clone()),
        }
    }

    /// Decide whether `other` carries the same value as `self`.
    ///
    /// Known values are equal iff their [`normalize`]d forms match. Null
    /// equals null and unknown equals unknown; any other pairing of states is
    /// not equal.
    ///
    /// `other` must itself be a `SemanticString`. Anything else means the
    /// caller wired the comparison up wrongly: an internal error diagnostic
    /// is reported and the result is "not equal".
    pub fn semantic_equals(
        &self,
        ctx: &Context<'_>,
        other: &dyn StringValuable,
    ) -> (bool, Diagnostics) {
        let mut diags = Diagnostics::new();

        let Some(other) = other.as_any().downcast_ref::<SemanticString>() else {
            let kind = DiagnosticKind::Internal(format!(
                "semantic equality expected a semantic string, got {}",
                other.kind_name()
            ));
            ctx.error(&format!("semantic_equals: {}", kind));
            diags.add_error(ctx.path().clone(), kind);
            return (false, diags);
        };

        let equal = match (&self.state, &other.state) {
            (State::Known(a), State::Known(b)) => {
                let equal = normalize(a) == normalize(b);
                ctx.info(&format!(
                    "semantic_equals: known values compared after normalization, equal = {}",
                    equal
                ));
                equal
            }
            (a, b) => {
                ctx.info("semantic_equals: compared null/unknown states");
                a == b
            }
        };
        (equal, diags)
    }
}

impl From<&str> for SemanticString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SemanticString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A string-like value that can sit on the other side of a semantic
/// comparison.
pub trait StringValuable: std::fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete value kind, for diagnostics.
    fn kind_name(&self) -> String;
}

impl StringValuable for SemanticString {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind_name(&self) -> String {
        "semantic string".to_string()
    }
}

impl StringValuable for TypedValue {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind_name(&self) -> String {
        self.type_name()
    }
}
