//! Markdown release notes formatter

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use relnotes_core::config::{Note, DEFAULT_TEMPLATE};
use relnotes_core::error::Result;

use super::NotesFormatter;
use crate::template::process_template;
use crate::types::ReleaseNotes;

/// Runs of blank lines left behind by empty placeholders
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid regex"));

/// Renders release notes through a `{{placeholder}}` template
pub struct MarkdownFormatter {
    template: String,
}

impl MarkdownFormatter {
    /// Create a formatter using the built-in template
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Use a custom template
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Placeholder values for `notes`
    pub fn variables(notes: &ReleaseNotes) -> BTreeMap<&'static str, String> {
        let mut vars = BTreeMap::new();
        vars.insert("project_name", notes.project_name.clone());
        vars.insert("github_repo", notes.github_repo.clone());
        vars.insert("tag", notes.tag.clone());
        vars.insert("version", notes.version.clone());
        vars.insert("date", notes.date.format("%Y-%m-%d").to_string());
        vars.insert("preface", notes.preface.trim().to_string());
        vars.insert(
            "previous",
            notes.previous.clone().unwrap_or_default(),
        );
        vars.insert(
            "pre_release",
            if notes.pre_release {
                " This is a pre-release.".to_string()
            } else {
                String::new()
            },
        );
        vars.insert("notes", note_sections(&notes.notes, 3));
        vars.insert("breaking", breaking_section(&notes.breaking));
        vars.insert("changes", changes_list(notes));
        vars.insert("contributors", contributors_list(notes));
        vars.insert("dependencies", dependencies_list(notes));
        vars.insert("previous_release", previous_release(notes));
        vars
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesFormatter for MarkdownFormatter {
    #[instrument(skip(self, notes), fields(tag = %notes.tag, changes = notes.changes.len()))]
    fn format(&self, notes: &ReleaseNotes) -> Result<String> {
        let rendered = process_template(&self.template, &Self::variables(notes));
        let output = BLANK_RUNS.replace_all(&rendered, "\n\n").into_owned();
        debug!(output_len = output.len(), "markdown release notes formatted");
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

fn note_sections(notes: &[Note], level: usize) -> String {
    let heading = "#".repeat(level);
    notes
        .iter()
        .map(|n| format!("{} {}\n\n{}\n", heading, n.title, n.description.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn breaking_section(breaking: &[Note]) -> String {
    if breaking.is_empty() {
        return String::new();
    }
    format!("## Breaking Changes\n\n{}", note_sections(breaking, 3))
}

fn changes_list(notes: &ReleaseNotes) -> String {
    if notes.changes.is_empty() {
        return "No changes in this release.".to_string();
    }
    notes
        .changes
        .iter()
        .map(|c| format!("* {} {}", c.commit, c.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn contributors_list(notes: &ReleaseNotes) -> String {
    notes
        .contributors
        .iter()
        .map(|name| format!("* {}", name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn dependencies_list(notes: &ReleaseNotes) -> String {
    if notes.dependencies.is_empty() {
        return "This release has no dependency changes".to_string();
    }
    notes
        .dependencies
        .iter()
        .map(|d| match &d.previous {
            Some(previous) => format!("* **{}** {} -> {}", d.name, previous, d.commit),
            None => format!("* **{}** {} **_new_**", d.name, d.commit),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn previous_release(notes: &ReleaseNotes) -> String {
    match (&notes.previous, notes.github_repo.is_empty()) {
        (Some(previous), false) => format!(
            "Previous release can be found at [{}](https://github.com/{}/releases/tag/{})",
            previous, notes.github_repo, previous
        ),
        _ => String::new(),
    }
}
