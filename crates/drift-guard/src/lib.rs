//! # drift-guard
//!
//! Comparators that decide whether a freshly observed value differs
//! meaningfully from the previously persisted one, so that a convergence loop
//! does not issue corrective writes for cosmetic differences.
//!
//! ## Modules
//!
//! - [`semantic`] — comma-separated strings compared ignoring order and spacing
//! - [`timestamp`] — RFC 3339 timestamps compared in UTC, written in their own offset
//! - [`error`] — Error types

pub mod error;
pub mod semantic;
pub mod timestamp;

pub use error::ReconcileError;
pub use semantic::{normalize, SemanticString, StringValuable};
pub use timestamp::{format_rfc3339, reconcile_in_place, reconcile_timestamp, Reconciled};
