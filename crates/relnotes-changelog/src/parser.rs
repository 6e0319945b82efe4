//! `git log --oneline` parsing

use tracing::debug;

use relnotes_core::error::{ChangelogError, Result};

use crate::types::Change;

/// Parse `<hash> <subject>` lines into changes, keeping log order.
///
/// Empty lines are skipped; a line of only whitespace is an error.
pub fn parse_changelog(raw: &str) -> Result<Vec<Change>> {
    let mut changes = Vec::new();

    for (idx, line) in raw.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let commit = fields
            .next()
            .ok_or(ChangelogError::EmptyLine { line: idx + 1 })?;
        let description = fields.collect::<Vec<_>>().join(" ");

        changes.push(Change::new(commit, description));
    }

    debug!(count = changes.len(), "parsed changelog");
    Ok(changes)
}
