//! # Log Template Formatter
//!
//! Template-driven rendering of structured log records, pluggable into a
//! host logging pipeline through the [`Formatter`] and [`Hook`] seams.
//!
//! ## Features
//!
//! - **Placeholder templates**: `[%lvl%]: %time% - %msg%` style
//!   substitution with per-field placeholders
//! - **Structured templates**: template-engine rendering over precomputed
//!   display strings, with a YAML-ish field dump
//! - **Severity colors**: per-level colors with a documented default table
//! - **Writer hook**: ship records at or above a threshold to a secondary
//!   sink such as a file

pub mod core;
pub mod formatters;
pub mod hooks;

pub mod prelude {
    pub use crate::core::{
        default_caller_renderer, Caller, CallerRenderer, FieldValue, Formatter, FormatterError,
        Hook, LevelColors, LogLevel, LogRecord, Result, TimestampFormat, ERROR_FIELD_KEY,
    };
    pub use crate::formatters::{StructuredFormatter, TemplateFormatter};
    pub use crate::hooks::WriterHook;
}

pub use crate::core::{
    default_caller_renderer, Caller, CallerRenderer, FieldValue, Formatter, FormatterError, Hook,
    LevelColors, LogLevel, LogRecord, Result, TimestampFormat, ERROR_FIELD_KEY,
};
pub use formatters::{StructuredFormatter, TemplateFormatter};
pub use hooks::WriterHook;
