//! Core record types and traits

pub mod caller;
pub mod error;
pub mod field_value;
pub mod formatter;
pub mod hook;
pub mod level_colors;
pub mod log_level;
pub mod log_record;
pub mod timestamp;

pub use caller::{default_caller_renderer, Caller, CallerRenderer};
pub use error::{FormatterError, Result};
pub use field_value::FieldValue;
pub use formatter::Formatter;
pub use hook::Hook;
pub use level_colors::LevelColors;
pub use log_level::LogLevel;
pub use log_record::{LogRecord, ERROR_FIELD_KEY};
pub use timestamp::TimestampFormat;
