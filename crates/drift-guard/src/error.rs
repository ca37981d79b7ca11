//! Error types for drift-guard operations.

use thiserror::Error;
use value_bridge::Path;

#[derive(Error, Debug)]
pub enum ReconcileError {
    /// The persisted timestamp no longer parses. This points at an upstream
    /// bug, so it is surfaced instead of being overwritten.
    #[error("cached timestamp {value:?} at {path} is not valid RFC 3339: {source}")]
    InvalidCachedTimestamp {
        path: Path,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
