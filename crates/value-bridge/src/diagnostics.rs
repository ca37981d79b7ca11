//! Severity-tagged, path-tagged diagnostics, accumulated instead of thrown.
//!
//! Every conversion returns its result together with a [`Diagnostics`] list.
//! Parents keep visiting their children after one of them fails and merge the
//! children's lists into their own, so a single call can surface every
//! independent problem in a tree at once.

use std::fmt;

use crate::error::DiagnosticKind;
use crate::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Voids the result of the subtree it is attached to.
    Error,
    /// Informational; never escalates.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Info => f.write_str("info"),
        }
    }
}

/// A single message about a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub path: Path,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn error(path: Path, kind: DiagnosticKind) -> Self {
        Self {
            severity: Severity::Error,
            path,
            kind,
        }
    }

    pub fn info(path: Path, kind: DiagnosticKind) -> Self {
        Self {
            severity: Severity::Info,
            path,
            kind,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.path, self.kind)
    }
}

/// Ordered collection of [`Diagnostic`]s. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn add_error(&mut self, path: Path, kind: DiagnosticKind) {
        self.push(Diagnostic::error(path, kind));
    }

    pub fn add_info(&mut self, path: Path, kind: DiagnosticKind) {
        self.push(Diagnostic::info(path, kind));
    }

    /// Append every entry of `other`, keeping its order.
    pub fn merge(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    /// True iff at least one entry has [`Severity::Error`].
    pub fn has_error(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|d| d.is_error()).count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.is_error())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
