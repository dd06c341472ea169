//! Formatter implementations

pub mod structured;
pub mod template;

pub use structured::StructuredFormatter;
pub use template::TemplateFormatter;

// Re-export the trait next to its implementations
pub use crate::core::Formatter;
