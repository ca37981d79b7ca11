//! Tests for converter configuration and the per-call context.

use value_bridge::config::DEFAULT_MAX_DEPTH;
use value_bridge::{Context, ConverterConfig, LogLevel, Logger, Path, RecordingLogger};

#[test]
fn default_depth_limit() {
    assert_eq!(ConverterConfig::default().max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(Context::default().config().max_depth, 64);
}

#[test]
fn config_parses_from_json() {
    let config = ConverterConfig::from_json(r#"{"max_depth": 8}"#).unwrap();
    assert_eq!(config.max_depth, 8);
}

#[test]
fn missing_fields_take_defaults() {
    let config = ConverterConfig::from_json("{}").unwrap();
    assert_eq!(config, ConverterConfig::default());
}

#[test]
fn malformed_config_is_an_error() {
    assert!(ConverterConfig::from_json(r#"{"max_depth": "deep"}"#).is_err());
}

#[test]
fn child_contexts_extend_path_and_depth() {
    let logger = RecordingLogger::new();
    let root = Context::new(&logger).at(Path::root().key("resource"));
    let child = root.key("tags").index(3);

    assert_eq!(root.path().to_string(), "resource");
    assert_eq!(root.depth(), 0);
    assert_eq!(child.path().to_string(), "resource.tags[3]");
    assert_eq!(child.depth(), 2);
}

#[test]
fn depth_is_exceeded_only_past_the_limit() {
    let logger = RecordingLogger::new();
    let ctx = Context::new(&logger).with_config(ConverterConfig { max_depth: 1 });
    assert!(!ctx.depth_exceeded());
    assert!(!ctx.key("a").depth_exceeded());
    assert!(ctx.key("a").key("b").depth_exceeded());
}

#[test]
fn context_logs_through_injected_logger_with_path() {
    let logger = RecordingLogger::new();
    let ctx = Context::new(&logger);
    ctx.key("a").info("hello");
    ctx.index(0).error("boom");

    let records = logger.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level, LogLevel::Info);
    assert_eq!(records[0].path.to_string(), "a");
    assert_eq!(records[1].level, LogLevel::Error);
    assert_eq!(records[1].message, "boom");

    logger.clear();
    assert!(logger.records().is_empty());
}

#[test]
fn logger_level_methods_forward_to_log() {
    let logger = RecordingLogger::new();
    let path = Path::root();
    logger.warn(&path, "w");
    logger.debug(&path, "d");
    let levels: Vec<LogLevel> = logger.records().iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![LogLevel::Warn, LogLevel::Debug]);
}
