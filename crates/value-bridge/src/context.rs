//! Per-call context: where in the tree we are, and whom to tell about it.

use crate::config::ConverterConfig;
use crate::logging::{Logger, TracingLogger};
use crate::path::Path;

static TRACING_LOGGER: TracingLogger = TracingLogger;

/// Carries the current [`Path`], the injected [`Logger`], the converter
/// configuration, and the current nesting depth.
///
/// Child contexts are derived with [`Context::key`] and [`Context::index`];
/// deriving never affects the parent. The context only annotates records and
/// diagnostics, it never changes what a conversion produces (apart from the
/// depth guard).
#[derive(Clone)]
pub struct Context<'a> {
    path: Path,
    logger: &'a dyn Logger,
    config: ConverterConfig,
    depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        Self {
            path: Path::root(),
            logger,
            config: ConverterConfig::default(),
            depth: 0,
        }
    }

    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    /// Start at `path` instead of the root, e.g. when converting one attribute
    /// of a larger resource.
    pub fn at(mut self, path: Path) -> Self {
        self.path = path;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn logger(&self) -> &'a dyn Logger {
        self.logger
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn key(&self, key: &str) -> Context<'a> {
        self.child(self.path.key(key))
    }

    pub fn index(&self, index: usize) -> Context<'a> {
        self.child(self.path.index(index))
    }

    /// True once this context sits deeper than `config.max_depth`.
    pub fn depth_exceeded(&self) -> bool {
        self.depth > self.config.max_depth
    }

    pub fn error(&self, message: &str) {
        self.logger.error(&self.path, message);
    }

    pub fn warn(&self, message: &str) {
        self.logger.warn(&self.path, message);
    }

    pub fn info(&self, message: &str) {
        self.logger.info(&self.path, message);
    }

    pub fn debug(&self, message: &str) {
        self.logger.debug(&self.path, message);
    }

    fn child(&self, path: Path) -> Context<'a> {
        Context {
            path,
            logger: self.logger,
            config: self.config,
            depth: self.depth + 1,
        }
    }
}

/// A root context logging through `tracing` with the default config.
impl Default for Context<'static> {
    fn default() -> Self {
        Context::new(&TRACING_LOGGER)
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("path", &self.path)
            .field("config", &self.config)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
