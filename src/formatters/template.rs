//! Placeholder-substitution formatter
//!
//! Renders a record by replacing `%name%` tokens in a template string.
//! Fixed placeholders (`%time%`, `%msg%`, `%lvl%`, `%caller%`) are replaced
//! first, in that order, then one placeholder per record field. Each
//! placeholder is replaced at most once; a template repeating a placeholder
//! only sees the first instance substituted. Unknown placeholders stay
//! verbatim in the output.

use crate::core::{
    default_caller_renderer, CallerRenderer, Formatter, LevelColors, LogRecord, Result,
    TimestampFormat,
};
use std::sync::Arc;

const DEFAULT_TEMPLATE: &str = "[%lvl%]: %time% - %msg%";

pub struct TemplateFormatter {
    template: String,
    timestamp_format: TimestampFormat,
    use_colors: bool,
    colors: LevelColors,
    caller_renderer: CallerRenderer,
}

impl TemplateFormatter {
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            timestamp_format: TimestampFormat::default(),
            use_colors: false,
            colors: LevelColors::default(),
            caller_renderer: Arc::new(default_caller_renderer),
        }
    }

    /// Set the template string. Recognized tokens are `%time%`, `%msg%`,
    /// `%lvl%`, `%caller%`, and `%<field>%` for each record field.
    #[must_use]
    pub fn with_template(mut self, template: &str) -> Self {
        self.template = template.to_string();
        self
    }

    /// Set the timestamp layout for `%time%`.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp layout using a strftime-compatible string.
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    /// Enable or disable colorizing the level name.
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

    /// Override how `%caller%` is rendered.
    #[must_use]
    pub fn with_caller_renderer(
        mut self,
        renderer: impl Fn(&crate::core::Caller) -> String + Send + Sync + 'static,
    ) -> Self {
        self.caller_renderer = Arc::new(renderer);
        self
    }

    fn level_string(&self, record: &LogRecord) -> String {
        if self.use_colors {
            self.colors.paint(record.level, record.level.to_str())
        } else {
            record.level.to_str().to_string()
        }
    }
}

impl Default for TemplateFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TemplateFormatter {
    fn format(&self, record: &LogRecord) -> Result<Vec<u8>> {
        let caller = record
            .caller
            .as_ref()
            .map(|c| (self.caller_renderer)(c))
            .unwrap_or_default();

        let mut output = self.template.clone();
        output = output.replacen("%time%", &self.timestamp_format.format(&record.timestamp), 1);
        output = output.replacen("%msg%", &record.message, 1);
        output = output.replacen("%lvl%", &self.level_string(record), 1);
        output = output.replacen("%caller%", &caller, 1);

        for (key, value) in &record.fields {
            if let Some(rendered) = value.as_scalar_string() {
                let placeholder = format!("%{}%", key);
                output = output.replacen(&placeholder, &rendered, 1);
            }
        }

        Ok(output.into_bytes())
    }
}
