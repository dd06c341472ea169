//! Integration tests for the formatter crate
//!
//! These tests verify:
//! - Default and custom template rendering
//! - Single-substitution placeholder semantics
//! - Severity color defaults
//! - Caller rendering and its absence
//! - Writer hook thresholding and error propagation

use chrono::{TimeZone, Utc};
use colored::Colorize;
use log_template_formatter::core::field_value::FieldValue;
use log_template_formatter::core::log_level::LogLevel;
use log_template_formatter::core::timestamp::TimestampFormat;
use log_template_formatter::formatters::{StructuredFormatter, TemplateFormatter};
use log_template_formatter::hooks::WriterHook;
use log_template_formatter::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

fn render(formatter: &dyn Formatter, record: &LogRecord) -> String {
    String::from_utf8(formatter.format(record).expect("format")).expect("utf8")
}

#[test]
fn test_default_format_shape() {
    let formatter = TemplateFormatter::new();
    let record = LogRecord::new(LogLevel::Warn, "Test Message");

    let expected = format!("[WARNING]: {} - Test Message", record.timestamp.to_rfc3339());
    assert_eq!(render(&formatter, &record), expected);
}

#[test]
fn test_custom_field_substituted_once() {
    let formatter = TemplateFormatter::new().with_template("[%lvl%]: %first% / %first%");
    let record = LogRecord::new(LogLevel::Info, "ignored").with_field("first", "First Custom Param");

    let output = render(&formatter, &record);
    assert_eq!(output, "[INFO]: First Custom Param / %first%");
}

#[test]
fn test_extra_fields_do_not_leak() {
    let formatter = TemplateFormatter::new().with_template("%msg%");
    let record = LogRecord::new(LogLevel::Info, "clean output")
        .with_field("secret", "do-not-print")
        .with_field("count", 9);

    let output = render(&formatter, &record);
    assert_eq!(output, "clean output");
}

#[test]
fn test_unmatched_placeholder_survives() {
    let formatter = TemplateFormatter::new().with_template("%msg% %random%");
    let record = LogRecord::new(LogLevel::Info, "hello");

    assert_eq!(render(&formatter, &record), "hello %random%");
}

#[test]
fn test_custom_timestamp_layouts() {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).single().unwrap();

    for (layout, expected) in [
        ("%Y-%m-%d", "2025-01-08"),
        ("%Y-%m-%d %H:%M:%S", "2025-01-08 10:30:45"),
        ("%d/%b/%Y", "08/Jan/2025"),
    ] {
        let formatter = TemplateFormatter::new()
            .with_template("%time%")
            .with_custom_timestamp(layout);
        let record = LogRecord::new(LogLevel::Info, "").with_timestamp(timestamp);
        assert_eq!(render(&formatter, &record), expected, "layout {}", layout);
    }
}

#[test]
fn test_default_colors_match_color_library() {
    let formatter = TemplateFormatter::new()
        .with_template("[%lvl%]: Hello world!")
        .with_colors(true);

    for level in LogLevel::ALL {
        let record = LogRecord::new(level, "");
        let expected = format!(
            "[{}]: Hello world!",
            level.to_str().color(level.default_color())
        );
        assert_eq!(render(&formatter, &record), expected, "level {}", level);
    }
}

#[test]
fn test_missing_caller_is_empty_not_literal() {
    let formatter = TemplateFormatter::new().with_template("%caller%%msg%");
    let record = LogRecord::new(LogLevel::Debug, "tail");

    assert_eq!(render(&formatter, &record), "tail");
}

#[test]
fn test_caller_short_path_and_function() {
    let sep = std::path::MAIN_SEPARATOR.to_string();
    let file = ["home", "app", "src", "net", "server.rs"].join(&sep);
    let formatter = TemplateFormatter::new().with_template("%caller%");
    let record = LogRecord::new(LogLevel::Debug, "")
        .with_caller(Caller::new(file, 17, "app::net::accept"));

    let expected = format!("{}:17 in accept", ["src", "net", "server.rs"].join(&sep));
    assert_eq!(render(&formatter, &record), expected);
}

#[test]
fn test_structured_formatter_with_nested_fields() {
    let mut nested = BTreeMap::new();
    nested.insert("ccc".to_string(), FieldValue::from("9"));
    nested.insert("ddd".to_string(), FieldValue::Null);

    let formatter = StructuredFormatter::new("test-console");
    let record = LogRecord::new(LogLevel::Error, "Hello World")
        .with_field("aaa", 1234)
        .with_field("bbb", nested);

    let output = render(&formatter, &record);
    assert!(output.contains("test-console"));
    assert!(output.contains("Hello World"));
    assert!(output.contains("aaa: 1234"));
    assert!(output.contains("bbb:\n  ccc: 9\n  ddd: null"));
}

#[test]
fn test_structured_error_field_readable() {
    let formatter = StructuredFormatter::new("svc");
    let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    let record = LogRecord::new(LogLevel::Error, "request failed").with_error(&err);

    let output = render(&formatter, &record);
    assert!(output.contains("error:\n  message: connection refused"));
}

#[test]
fn test_hook_writes_errors_and_above_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("errors.log");

    let formatter = TemplateFormatter::new().with_template("[%lvl%] %msg%");
    let mut hook = WriterHook::to_file(&log_file, LogLevel::Error, formatter)
        .expect("Failed to create hook");

    assert_eq!(
        hook.levels(),
        vec![LogLevel::Error, LogLevel::Fatal, LogLevel::Panic]
    );

    // The host consults levels(); simulate it here.
    for record in [
        LogRecord::new(LogLevel::Info, "routine"),
        LogRecord::new(LogLevel::Error, "broken"),
        LogRecord::new(LogLevel::Panic, "gone"),
    ] {
        if hook.levels().contains(&record.level) {
            hook.fire(&record).expect("fire");
        }
    }
    hook.flush().expect("flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "[ERROR] broken\n[PANIC] gone\n");
}

#[test]
fn test_hook_with_structured_formatter() {
    let formatter = StructuredFormatter::new("file-sink")
        .with_timestamp_format(TimestampFormat::Custom("%Y-%m-%d".to_string()));
    let mut hook = WriterHook::new(Vec::new(), LogLevel::Warn, formatter);

    let record = LogRecord::new(LogLevel::Warn, "low disk")
        .with_timestamp(Utc.with_ymd_and_hms(2025, 1, 8, 0, 0, 0).single().unwrap())
        .with_field("free_mb", 12);
    hook.fire(&record).expect("fire");

    let written = String::from_utf8(hook.sink().clone()).expect("utf8");
    assert!(written.starts_with("2025-01-08 [WARN ] file-sink"));
    assert!(written.contains("low disk"));
    assert!(written.contains("free_mb: 12"));
    assert!(written.ends_with('\n'));
}

#[test]
fn test_formatter_shared_behind_trait_object() {
    let formatter: Box<dyn Formatter> = Box::new(TemplateFormatter::new());
    let record = LogRecord::new(LogLevel::Info, "dyn dispatch");
    assert!(render(formatter.as_ref(), &record).contains("dyn dispatch"));
}
