//! The repository operations release notes are built from

use crate::repository::{GitRepo, Result};
use crate::types::RevisionRange;

/// Read-only repository introspection.
///
/// [`GitRepo`] is the real implementation; anything that can answer these
/// four questions can drive release notes generation.
pub trait GitBackend {
    /// Contents of `path` at `revision`, or `GitError::FileNotFound`
    fn file_at_revision(&self, revision: &str, path: &str) -> Result<String>;

    /// One `<short hash> <subject>` line per commit in the range
    fn log_oneline(&self, range: &RevisionRange) -> Result<String>;

    /// One `<email> <name>` line per commit in the range
    fn log_authors(&self, range: &RevisionRange) -> Result<String>;

    /// Full hash of a commit
    fn resolve_commit(&self, revision: &str) -> Result<String>;
}

impl GitBackend for GitRepo {
    fn file_at_revision(&self, revision: &str, path: &str) -> Result<String> {
        GitRepo::file_at_revision(self, revision, path)
    }

    fn log_oneline(&self, range: &RevisionRange) -> Result<String> {
        GitRepo::log_oneline(self, range)
    }

    fn log_authors(&self, range: &RevisionRange) -> Result<String> {
        GitRepo::log_authors(self, range)
    }

    fn resolve_commit(&self, revision: &str) -> Result<String> {
        GitRepo::resolve_commit(self, revision)
    }
}
