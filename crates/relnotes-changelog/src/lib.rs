//! relnotes Changelog - Changelog extraction and release notes generation
//!
//! This crate turns a revision range into changelog entries, links them to
//! GitHub, ranks contributors and renders the assembled release notes.

mod contributors;
pub mod formatter;
pub mod generator;
mod links;
mod parser;
pub mod template;
pub mod types;

pub use contributors::{add_contributors, order_contributors, ContributorTally};
pub use formatter::{JsonFormatter, MarkdownFormatter, NotesFormatter};
pub use generator::ReleaseNotesGenerator;
pub use links::{github_commit_link, github_pr_link, linkify_changes};
pub use parser::parse_changelog;
pub use types::{Change, Contributor, ReleaseNotes};
