//! Structured template-engine formatter
//!
//! Precomputes a small record of display strings (time, padded level,
//! module label, caller, message, a YAML-ish dump of the record's fields)
//! and renders it through `tinytemplate`. A malformed template is rejected
//! at construction; a render-time failure falls back to a built-in layout
//! rather than surfacing an error, since a misconfigured formatter must not
//! take down the process that owns the logger.

use crate::core::{
    default_caller_renderer, CallerRenderer, FieldValue, Formatter, FormatterError, LevelColors,
    LogRecord, Result, TimestampFormat, ERROR_FIELD_KEY,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tinytemplate::TinyTemplate;

const TEMPLATE_NAME: &str = "record";
const DEFAULT_TEMPLATE: &str =
    "{time} [{level}] {module} {caller} - {message}{{ if has_fields }}\n{fields}{{ endif }}";

/// Display strings the template is executed against.
#[derive(Debug, Serialize)]
struct DisplayRecord {
    time: String,
    level: String,
    module: String,
    caller: String,
    message: String,
    fields: String,
    has_fields: bool,
}

pub struct StructuredFormatter {
    template: String,
    module: String,
    timestamp_format: TimestampFormat,
    use_colors: bool,
    colors: LevelColors,
    caller_renderer: CallerRenderer,
}

impl StructuredFormatter {
    /// Create a formatter with the built-in template and a static module
    /// label included in every rendered line.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            module: module.into(),
            timestamp_format: TimestampFormat::default(),
            use_colors: false,
            colors: LevelColors::default(),
            caller_renderer: Arc::new(default_caller_renderer),
        }
    }

    /// Replace the template. Field references are `{time}`, `{level}`,
    /// `{module}`, `{caller}`, `{message}`, `{fields}`, `{has_fields}`.
    ///
    /// The template is parsed up front; a malformed template is rejected
    /// here so it can never fail a later `format` call.
    pub fn with_template(mut self, template: &str) -> Result<Self> {
        let mut tt = TinyTemplate::new();
        tt.add_template(TEMPLATE_NAME, template)
            .map_err(|e| FormatterError::template(e.to_string()))?;
        self.template = template.to_string();
        Ok(self)
    }

    /// Set the timestamp layout for `{time}`.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Enable or disable colorizing the level string.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Override the severity-to-color table.
    #[must_use]
    pub fn with_level_colors(mut self, colors: LevelColors) -> Self {
        self.colors = colors;
        self
    }

    /// Override how `{caller}` is rendered.
    #[must_use]
    pub fn with_caller_renderer(
        mut self,
        renderer: impl Fn(&crate::core::Caller) -> String + Send + Sync + 'static,
    ) -> Self {
        self.caller_renderer = Arc::new(renderer);
        self
    }

    fn display_record(&self, record: &LogRecord) -> DisplayRecord {
        // Pad to a fixed width before coloring; ANSI escapes would skew
        // column alignment otherwise.
        let padded = format!("{:<5}", record.level.short_str());
        let level = if self.use_colors {
            self.colors.paint(record.level, &padded)
        } else {
            padded
        };

        let caller = record
            .caller
            .as_ref()
            .map(|c| (self.caller_renderer)(c))
            .unwrap_or_default();

        let fields = dump_fields(&rewrite_error_field(&record.fields));

        DisplayRecord {
            time: self.timestamp_format.format(&record.timestamp),
            level,
            module: self.module.clone(),
            caller,
            message: record.message.clone(),
            has_fields: !fields.is_empty(),
            fields,
        }
    }

    fn fallback_line(display: &DisplayRecord) -> String {
        let mut line = format!(
            "{} [{}] {} {} - {}",
            display.time, display.level, display.module, display.caller, display.message
        );
        if display.has_fields {
            line.push('\n');
            line.push_str(&display.fields);
        }
        line
    }
}

impl Formatter for StructuredFormatter {
    fn format(&self, record: &LogRecord) -> Result<Vec<u8>> {
        let display = self.display_record(record);

        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        let rendered = match tt.add_template(TEMPLATE_NAME, &self.template) {
            Ok(()) => tt
                .render(TEMPLATE_NAME, &display)
                .unwrap_or_else(|_| Self::fallback_line(&display)),
            Err(_) => Self::fallback_line(&display),
        };

        Ok(rendered.into_bytes())
    }
}

/// Rewrite a scalar `"error"` field into `error: {message: <text>}` so the
/// dump shows a readable message.
fn rewrite_error_field(
    fields: &BTreeMap<String, FieldValue>,
) -> BTreeMap<String, FieldValue> {
    let mut fields = fields.clone();
    if let Some(value) = fields.get(ERROR_FIELD_KEY) {
        if let Some(text) = value.as_scalar_string() {
            let mut wrapper = BTreeMap::new();
            wrapper.insert("message".to_string(), FieldValue::String(text));
            fields.insert(ERROR_FIELD_KEY.to_string(), FieldValue::Map(wrapper));
        }
    }
    fields
}

/// YAML-ish dump of record fields: one `key: value` line per field, nested
/// maps indented two spaces per depth, null printed as `null`.
fn dump_fields(fields: &BTreeMap<String, FieldValue>) -> String {
    let mut out = String::new();
    dump_into(&mut out, fields, 0);
    out.truncate(out.trim_end_matches('\n').len());
    out
}

fn dump_into(out: &mut String, fields: &BTreeMap<String, FieldValue>, depth: usize) {
    let pad = "  ".repeat(depth);
    for (key, value) in fields {
        match value {
            FieldValue::Map(nested) => {
                out.push_str(&format!("{}{}:\n", pad, key));
                dump_into(out, nested, depth + 1);
            }
            FieldValue::Null => out.push_str(&format!("{}{}: null\n", pad, key)),
            scalar => out.push_str(&format!("{}{}: {}\n", pad, key, scalar)),
        }
    }
}
