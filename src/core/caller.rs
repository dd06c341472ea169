//! Call-site metadata and its display rendering

use serde::{Deserialize, Serialize};
use std::path::MAIN_SEPARATOR;
use std::sync::Arc;

/// Call-site descriptor, present only when the host framework was
/// configured to capture it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl Caller {
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }
}

/// User-overridable pure function mapping a caller descriptor to a display
/// string.
pub type CallerRenderer = Arc<dyn Fn(&Caller) -> String + Send + Sync>;

/// Default caller rendering: `shortPath:line in function`.
///
/// The short path keeps at most the last three segments of the file path,
/// and the function name keeps only its final `::` segment.
pub fn default_caller_renderer(caller: &Caller) -> String {
    let separator = MAIN_SEPARATOR.to_string();
    let segments: Vec<&str> = caller.file.split(MAIN_SEPARATOR).collect();
    let start = segments.len().saturating_sub(3);
    let short_path = segments[start..].join(&separator);

    let function = caller
        .function
        .rsplit("::")
        .next()
        .unwrap_or(&caller.function);

    format!("{}:{} in {}", short_path, caller.line, function)
}
