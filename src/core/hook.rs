//! Hook trait for secondary log destinations

use super::{error::Result, log_level::LogLevel, log_record::LogRecord};

/// A pluggable secondary destination for log records.
///
/// The host pipeline consults `levels()` to decide which records a hook
/// receives, then calls `fire()` for each matching record. `fire()` itself
/// does not filter.
pub trait Hook: Send {
    /// Severities this hook fires for.
    fn levels(&self) -> Vec<LogLevel>;

    /// Render and deliver one record.
    fn fire(&mut self, record: &LogRecord) -> Result<()>;
}
