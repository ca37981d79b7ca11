//! The tri-state typed value model.
//!
//! A [`TypedValue`] is either null, unknown (not yet known, e.g. computed later),
//! or a known value of some declared shape. Container shapes are fixed when the
//! value is built: a list carries its element type, a tuple its positions, and an
//! object its key set.

use std::collections::BTreeMap;
use std::fmt;

use bigdecimal::BigDecimal;

/// Declared shape of a [`TypedValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    Bool,
    String,
    Number,
    Int64,
    /// Homogeneous sequence of the boxed element type.
    List(Box<ValueType>),
    /// Heterogeneous, positional sequence.
    Tuple(Vec<ValueType>),
    /// Fixed key set, each key with its own type.
    Object(BTreeMap<String, ValueType>),
    /// No declared shape; what null and unknown report.
    Dynamic,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Bool => f.write_str("bool"),
            ValueType::String => f.write_str("string"),
            ValueType::Number => f.write_str("number"),
            ValueType::Int64 => f.write_str("int64"),
            ValueType::List(element) => write!(f, "list<{}>", element),
            ValueType::Tuple(elements) => {
                f.write_str("tuple<")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str(">")
            }
            ValueType::Object(attributes) => {
                f.write_str("object<")?;
                for (i, (key, ty)) in attributes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, ty)?;
                }
                f.write_str(">")
            }
            ValueType::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// A node of the typed configuration/state tree.
///
/// `Null` and `Unknown` carry no payload. Numbers are arbitrary precision;
/// `Int64` is the fixed-width integer kind used by list attributes that the
/// external API expects as delimited text.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Null,
    Unknown,
    Bool(bool),
    String(String),
    Number(BigDecimal),
    Int64(i64),
    List {
        element: ValueType,
        items: Vec<TypedValue>,
    },
    Tuple(Vec<TypedValue>),
    Object(BTreeMap<String, TypedValue>),
}

impl TypedValue {
    pub fn string(s: impl Into<String>) -> Self {
        TypedValue::String(s.into())
    }

    pub fn number(n: impl Into<BigDecimal>) -> Self {
        TypedValue::Number(n.into())
    }

    pub fn list(element: ValueType, items: Vec<TypedValue>) -> Self {
        TypedValue::List { element, items }
    }

    pub fn tuple(items: Vec<TypedValue>) -> Self {
        TypedValue::Tuple(items)
    }

    /// Build an object from `(key, value)` pairs. Later duplicates win.
    pub fn object<K, I>(attributes: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TypedValue)>,
    {
        TypedValue::Object(
            attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TypedValue::Unknown)
    }

    /// Neither null nor unknown.
    pub fn is_known(&self) -> bool {
        !self.is_null() && !self.is_unknown()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attribute lookup on an object; `None` for other shapes or absent keys.
    pub fn get(&self, key: &str) -> Option<&TypedValue> {
        match self {
            TypedValue::Object(attributes) => attributes.get(key),
            _ => None,
        }
    }

    /// Element lookup on a tuple or list.
    pub fn element(&self, index: usize) -> Option<&TypedValue> {
        match self {
            TypedValue::Tuple(items) | TypedValue::List { items, .. } => items.get(index),
            _ => None,
        }
    }

    /// The declared shape of this value. Null and unknown report
    /// [`ValueType::Dynamic`].
    pub fn value_type(&self) -> ValueType {
        match self {
            TypedValue::Null | TypedValue::Unknown => ValueType::Dynamic,
            TypedValue::Bool(_) => ValueType::Bool,
            TypedValue::String(_) => ValueType::String,
            TypedValue::Number(_) => ValueType::Number,
            TypedValue::Int64(_) => ValueType::Int64,
            TypedValue::List { element, .. } => ValueType::List(Box::new(element.clone())),
            TypedValue::Tuple(items) => {
                ValueType::Tuple(items.iter().map(TypedValue::value_type).collect())
            }
            TypedValue::Object(attributes) => ValueType::Object(
                attributes
                    .iter()
                    .map(|(k, v)| (k.clone(), v.value_type()))
                    .collect(),
            ),
        }
    }

    /// Short name used in diagnostics and log records.
    pub fn type_name(&self) -> String {
        match self {
            TypedValue::Null => "null".to_string(),
            TypedValue::Unknown => "unknown".to_string(),
            other => other.value_type().to_string(),
        }
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Bool(b)
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        TypedValue::String(s.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        TypedValue::String(s)
    }
}

impl From<i64> for TypedValue {
    fn from(n: i64) -> Self {
        TypedValue::Int64(n)
    }
}

impl From<BigDecimal> for TypedValue {
    fn from(n: BigDecimal) -> Self {
        TypedValue::Number(n)
    }
}
