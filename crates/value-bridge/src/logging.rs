//! Injectable logging capability.
//!
//! Conversions never reach for a global logger. They log through the
//! [`Logger`] carried by their [`Context`](crate::Context), passing the path of
//! the node being converted with every record. [`TracingLogger`] forwards to
//! `tracing`; how the subscriber is configured is the embedding program's
//! business.

use std::cell::RefCell;
use std::fmt;

use crate::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        })
    }
}

/// Sink for path-annotated log records.
///
/// Implementors only need [`Logger::log`]; the level-named methods forward to it.
pub trait Logger {
    fn log(&self, level: LogLevel, path: &Path, message: &str);

    fn error(&self, path: &Path, message: &str) {
        self.log(LogLevel::Error, path, message);
    }

    fn warn(&self, path: &Path, message: &str) {
        self.log(LogLevel::Warn, path, message);
    }

    fn info(&self, path: &Path, message: &str) {
        self.log(LogLevel::Info, path, message);
    }

    fn debug(&self, path: &Path, message: &str) {
        self.log(LogLevel::Debug, path, message);
    }
}

/// Emits `tracing` events under the `value_bridge` target, with the node path
/// recorded as the `path` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, path: &Path, message: &str) {
        match level {
            LogLevel::Error => tracing::error!(target: "value_bridge", path = %path, "{}", message),
            LogLevel::Warn => tracing::warn!(target: "value_bridge", path = %path, "{}", message),
            LogLevel::Info => tracing::info!(target: "value_bridge", path = %path, "{}", message),
            LogLevel::Debug => tracing::debug!(target: "value_bridge", path = %path, "{}", message),
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _path: &Path, _message: &str) {}
}

/// One captured record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub path: Path,
    pub message: String,
}

/// Keeps every record in memory, in emission order. Intended for tests that
/// assert which conversion branches were taken.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: RefCell<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.borrow().clone()
    }

    /// True if any record's message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.records
            .borrow()
            .iter()
            .any(|record| record.message.contains(needle))
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, path: &Path, message: &str) {
        self.records.borrow_mut().push(LogRecord {
            level,
            path: path.clone(),
            message: message.to_string(),
        });
    }
}
