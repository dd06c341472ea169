//! Log record structure

use super::caller::Caller;
use super::field_value::FieldValue;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Conventional field key under which an attached error is recorded.
pub const ERROR_FIELD_KEY: &str = "error";

/// One structured log event as handed to a formatter.
///
/// Owned and constructed by the host logging pipeline; read-only to
/// formatters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub fields: BTreeMap<String, FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<Caller>,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            fields: BTreeMap::new(),
            caller: None,
        }
    }

    /// Override the creation timestamp, e.g. when replaying records.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        for (key, value) in fields {
            self.fields.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Attach an error under the conventional `"error"` field key, recorded
    /// as its rendered text.
    pub fn with_error(self, error: &dyn std::error::Error) -> Self {
        self.with_field(ERROR_FIELD_KEY, error.to_string())
    }
}
