//! Severity-to-color mapping
//!
//! An immutable color table passed into formatter instances. Overrides are
//! per-level; anything not overridden falls back to the level's documented
//! default color.

use super::log_level::LogLevel;
use colored::{Color, Colorize};
use std::collections::HashMap;

/// Mapping from severity to display color.
#[derive(Debug, Clone, Default)]
pub struct LevelColors {
    overrides: HashMap<LogLevel, Color>,
}

impl LevelColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the color for one level.
    #[must_use]
    pub fn with_color(mut self, level: LogLevel, color: Color) -> Self {
        self.overrides.insert(level, color);
        self
    }

    /// Color for a level, falling back to the documented default.
    pub fn color_for(&self, level: LogLevel) -> Color {
        self.overrides
            .get(&level)
            .copied()
            .unwrap_or_else(|| level.default_color())
    }

    /// Wrap a display string in the color configured for `level`.
    pub fn paint(&self, level: LogLevel, text: &str) -> String {
        text.color(self.color_for(level)).to_string()
    }
}
