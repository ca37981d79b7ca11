//! Breadcrumb paths attached to diagnostics and log records.
//!
//! A [`Path`] is an ordered list of steps from the root of a value tree down to
//! the node currently being converted. Paths are append-only: extending a path
//! returns a new one and leaves the parent untouched, so a parent can hand out
//! child paths to each of its children without cloning bookkeeping of its own.

use std::fmt;

/// One step of a [`Path`]: either an object key or a sequence position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

/// Location of a node inside a value tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// The empty path, pointing at the tree root.
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path one object key deeper.
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.with_step(PathStep::Key(key.into()))
    }

    /// A new path one sequence position deeper.
    pub fn index(&self, index: usize) -> Self {
        self.with_step(PathStep::Index(index))
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    fn with_step(&self, step: PathStep) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend(self.steps.iter().cloned());
        steps.push(step);
        Self { steps }
    }
}

/// Renders as `spec.rules[2].name`; the root renders as `(root)`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("(root)");
        }
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathStep::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
