//! # value-bridge
//!
//! Converts between a strongly-typed, tri-state (null / unknown / known) value
//! tree and the untyped JSON trees spoken by an external API.
//!
//! Conversions never fail fast. Each returns its (possibly partial) result
//! together with [`Diagnostics`], an ordered list of path-tagged messages, so a
//! single call reports every problem in a tree.
//!
//! ## Quick start
//!
//! ```rust
//! use value_bridge::{externalize, internalize, Context, TypedValue};
//!
//! let ctx = Context::default();
//! let state = TypedValue::object([
//!     ("name", TypedValue::from("web")),
//!     ("replicas", TypedValue::number(3)),
//! ]);
//!
//! // typed → JSON
//! let (json, diags) = externalize(&ctx, &state);
//! assert!(!diags.has_error());
//!
//! // JSON → typed, using the previous state as the shape hint
//! let (back, diags) = internalize(&ctx, &json.unwrap(), Some(&state));
//! assert!(!diags.has_error());
//! assert_eq!(back, Some(state));
//! ```
//!
//! ## Modules
//!
//! - [`externalize`] — typed value → JSON (lenient: failed children are dropped)
//! - [`internalize`] — JSON → typed value (atomic per container, hint-guided)
//! - [`flatten`] — string/int64 list → delimited text
//! - [`types`] — `TypedValue` and `ValueType`
//! - [`diagnostics`] / [`error`] — accumulated diagnostics and their messages
//! - [`path`], [`context`], [`logging`], [`config`] — per-call plumbing

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod externalize;
pub mod flatten;
pub mod internalize;
pub mod logging;
pub mod path;
pub mod types;

pub use config::ConverterConfig;
pub use context::Context;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::DiagnosticKind;
pub use externalize::externalize;
pub use flatten::flatten;
pub use internalize::internalize;
pub use logging::{LogLevel, LogRecord, Logger, NoopLogger, RecordingLogger, TracingLogger};
pub use path::{Path, PathStep};
pub use types::{TypedValue, ValueType};
