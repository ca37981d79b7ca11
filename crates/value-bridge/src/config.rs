//! Converter configuration.

use serde::{Deserialize, Serialize};

/// Default recursion limit for [`ConverterConfig::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunables shared by every conversion reached from one [`Context`](crate::Context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Deepest container nesting a conversion will descend into. Subtrees
    /// below this depth produce a `DepthExceeded` error and no value.
    pub max_depth: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConverterConfig {
    /// Parse a config document such as `{"max_depth": 16}`. Missing fields
    /// take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
