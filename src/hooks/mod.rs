//! Hook implementations

pub mod writer;

pub use writer::WriterHook;

// Re-export the trait next to its implementation
pub use crate::core::Hook;
