//! Basic formatter usage example
//!
//! Demonstrates both rendering strategies and an error-and-above file hook.
//!
//! Run with: cargo run --example basic_usage

use log_template_formatter::prelude::*;
use std::collections::BTreeMap;
use std::io::Write;

fn main() -> Result<()> {
    println!("=== Log Template Formatter - Basic Usage Example ===\n");

    // Structured formatter for console-style output
    let console = StructuredFormatter::new("test-console").with_colors(true);

    // Template formatter shipping error-and-above records to a file
    let file_formatter = TemplateFormatter::new().with_template("[%lvl%] %time% %msg% (%caller%)");
    let mut file_hook = WriterHook::to_file("errors.log", LogLevel::Error, file_formatter)?;

    let mut nested = BTreeMap::new();
    nested.insert("ccc".to_string(), FieldValue::from("9"));
    nested.insert("nil".to_string(), FieldValue::Null);

    println!("1. Records at different levels:");
    for level in [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ] {
        let record = LogRecord::new(level, "Hello World")
            .with_field("aaa", 1234)
            .with_field("bbb", nested.clone())
            .with_caller(Caller::new(file!(), line!(), "basic_usage::main"));

        std::io::stdout().write_all(&console.format(&record)?)?;
        println!();

        if file_hook.levels().contains(&record.level) {
            file_hook.fire(&record)?;
        }
    }

    println!("\n2. Record with an attached error:");
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "hahaha");
    let record = LogRecord::new(LogLevel::Error, "wahaha").with_error(&io_err);
    std::io::stdout().write_all(&console.format(&record)?)?;
    println!();
    file_hook.fire(&record)?;
    file_hook.flush()?;

    println!("\nerror-and-above records were also appended to errors.log");
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
