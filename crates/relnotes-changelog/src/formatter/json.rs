//! JSON release notes formatter

use relnotes_core::error::Result;

use super::NotesFormatter;
use crate::types::ReleaseNotes;

/// Pretty-printed JSON of the whole [`ReleaseNotes`]
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl NotesFormatter for JsonFormatter {
    fn format(&self, notes: &ReleaseNotes) -> Result<String> {
        Ok(serde_json::to_string_pretty(notes)?)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
