//! Release notes formatters

mod json;
mod markdown;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

use relnotes_core::error::Result;

use crate::types::ReleaseNotes;

/// Trait for release notes formatters
pub trait NotesFormatter {
    /// Render release notes to a string
    fn format(&self, notes: &ReleaseNotes) -> Result<String>;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
