//! Decide whether a cached RFC 3339 timestamp must be overwritten by a newly
//! observed instant.
//!
//! The same instant can be written with different UTC offsets
//! (`2021-01-01T07:00:00Z` and `2021-01-01T00:00:00-07:00`). Treating those as
//! different would rewrite the cache on every observation, so instants are
//! compared in UTC. When the cache does have to change, the new text keeps the
//! offset the instant was observed with.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use value_bridge::Context;

use crate::error::{ReconcileError, Result};

/// Outcome of [`reconcile_timestamp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    /// Keep the cached text as it is.
    Unchanged,
    /// Replace the cached text with this value.
    Replace(String),
}

impl Reconciled {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Reconciled::Unchanged)
    }

    /// Write the outcome into `cached`.
    pub fn apply(self, cached: &mut String) {
        if let Reconciled::Replace(text) = self {
            *cached = text;
        }
    }
}

/// Compare a newly observed instant against the cached text.
///
/// - no instant → the cache is cleared
/// - empty cache → the instant, formatted in its own offset
/// - cache parses and names the same instant in UTC → [`Reconciled::Unchanged`]
/// - cache parses and names a different instant → the new instant, formatted
///   in its own offset
///
/// # Errors
/// Returns [`ReconcileError::InvalidCachedTimestamp`] if the cache is
/// non-empty and not valid RFC 3339 (only consulted when an instant is given).
///
/// # Example
/// ```
/// use chrono::DateTime;
/// use drift_guard::{reconcile_timestamp, Reconciled};
/// use value_bridge::Context;
///
/// let observed = DateTime::parse_from_rfc3339("2021-01-01T07:00:00Z").unwrap();
/// let outcome = reconcile_timestamp(&Context::default(), Some(&observed), "2021-01-01T00:00:00-07:00").unwrap();
/// assert_eq!(outcome, Reconciled::Unchanged);
/// ```
pub fn reconcile_timestamp(
    ctx: &Context<'_>,
    new: Option<&DateTime<FixedOffset>>,
    cached: &str,
) -> Result<Reconciled> {
    let Some(new) = new else {
        ctx.info("reconcile_timestamp: no instant observed, clearing cache");
        if cached.is_empty() {
            return Ok(Reconciled::Unchanged);
        }
        return Ok(Reconciled::Replace(String::new()));
    };

    if cached.is_empty() {
        ctx.info("reconcile_timestamp: empty cache, writing observed instant");
        return Ok(Reconciled::Replace(format_rfc3339(new)));
    }

    let previous = DateTime::parse_from_rfc3339(cached).map_err(|source| {
        ctx.error(&format!(
            "reconcile_timestamp: cached value {:?} is not RFC 3339",
            cached
        ));
        ReconcileError::InvalidCachedTimestamp {
            path: ctx.path().clone(),
            value: cached.to_string(),
            source,
        }
    })?;

    if new.with_timezone(&Utc) == previous.with_timezone(&Utc) {
        ctx.info("reconcile_timestamp: same instant in UTC, keeping cache");
        Ok(Reconciled::Unchanged)
    } else {
        ctx.info("reconcile_timestamp: instant changed, overwriting cache");
        Ok(Reconciled::Replace(format_rfc3339(new)))
    }
}

/// [`reconcile_timestamp`], then apply the outcome to `cached`. On error
/// `cached` is left untouched.
pub fn reconcile_in_place(
    ctx: &Context<'_>,
    new: Option<&DateTime<FixedOffset>>,
    cached: &mut String,
) -> Result<()> {
    reconcile_timestamp(ctx, new, cached.as_str())?.apply(cached);
    Ok(())
}

/// RFC 3339 in the instant's own offset: `Z` for UTC, fractional seconds only
/// when present.
pub fn format_rfc3339(instant: &DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
