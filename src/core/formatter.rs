//! Formatter trait for pluggable record rendering

use super::{error::Result, log_record::LogRecord};

/// Renders a log record into its output byte sequence.
///
/// Implementations are stateless across calls apart from their immutable
/// configuration; the host pipeline is responsible for serializing calls.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Result<Vec<u8>>;
}
