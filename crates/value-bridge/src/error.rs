//! Message catalogue for conversion diagnostics.

use thiserror::Error;

/// What went wrong (or what is worth noting) at one node of a value tree.
///
/// These are never returned as `Err`; they travel inside a
/// [`Diagnostic`](crate::diagnostics::Diagnostic) together with a severity and
/// the path of the node they describe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A typed value whose declared shape has no generic-tree equivalent.
    #[error("unsupported shape: cannot externalize a value of type {type_name}")]
    UnsupportedShape { type_name: String },

    /// A generic value whose runtime kind has no typed equivalent.
    #[error("unsupported value: cannot internalize a value of kind {observed}")]
    UnsupportedValue { observed: String },

    /// A list whose element type cannot be flattened into delimited text.
    #[error("unsupported element type: cannot flatten a list of {element_type}")]
    UnsupportedElementType { element_type: String },

    /// A null or unknown element inside a list being flattened.
    #[error("list element is {state} and cannot be flattened")]
    NullElement { state: String },

    /// A number with no finite double-precision equivalent.
    #[error("number {value} has no finite double-precision representation")]
    NumberNotRepresentable { value: String },

    /// Recursion stopped at the configured depth limit.
    #[error("value tree exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    /// An invariant the caller was responsible for did not hold.
    #[error("internal error: {0}")]
    Internal(String),

    /// Free-form informational text.
    #[error("{0}")]
    Note(String),
}
