//! Field value type for structured log records
//!
//! A closed sum over the value shapes a record may carry: strings, integers,
//! booleans, nested mappings, and null. Renderers match exhaustively; only
//! scalar variants are substitutable into templates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Bool(bool),
    Map(BTreeMap<String, FieldValue>),
    Null,
}

impl FieldValue {
    /// Whether this value may be substituted into a template placeholder.
    ///
    /// Maps and null are skipped by template substitution; their
    /// placeholders are left untouched.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            FieldValue::String(_) | FieldValue::Int(_) | FieldValue::Bool(_)
        )
    }

    /// Render a scalar value for substitution. Returns `None` for maps and
    /// null.
    pub fn as_scalar_string(&self) -> Option<String> {
        match self {
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Int(i) => Some(i.to_string()),
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Map(_) | FieldValue::Null => None,
        }
    }

    /// Convert to serde_json::Value for hosts that ship records as JSON.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Map(m) => serde_json::Value::Object(
                m.iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect(),
            ),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Map(m) => {
                let inner = m
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "{{{}}}", inner)
            }
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<BTreeMap<String, FieldValue>> for FieldValue {
    fn from(m: BTreeMap<String, FieldValue>) -> Self {
        FieldValue::Map(m)
    }
}
