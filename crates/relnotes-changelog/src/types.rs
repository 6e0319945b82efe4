//! Changelog types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use relnotes_core::config::Note;
use relnotes_deps::Dependency;

/// One commit in the changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Short hash, or a Markdown link once linkified
    pub commit: String,
    /// First line of the commit message
    pub description: String,
}

impl Change {
    /// Create a new change
    pub fn new(commit: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
            description: description.into(),
        }
    }
}

/// A commit author as recorded in git, compared exactly
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contributor {
    /// Author name
    pub name: String,
    /// Author email
    pub email: String,
}

/// Everything a release notes template can show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseNotes {
    /// Project name
    pub project_name: String,
    /// GitHub repository in `owner/repo` form
    pub github_repo: String,
    /// Release tag
    pub tag: String,
    /// Tag without the leading `v`
    pub version: String,
    /// Generation date
    pub date: DateTime<Utc>,
    /// Whether this is a pre-release
    pub pre_release: bool,
    /// Introduction text
    pub preface: String,
    /// Previous release revision
    pub previous: Option<String>,
    /// Highlighted notes
    pub notes: Vec<Note>,
    /// Breaking changes
    pub breaking: Vec<Note>,
    /// Commits in the release, newest first
    pub changes: Vec<Change>,
    /// Contributor names, most commits first
    pub contributors: Vec<String>,
    /// New and updated dependencies
    pub dependencies: Vec<Dependency>,
}
