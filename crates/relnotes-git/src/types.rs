//! Git types

use std::fmt;

/// The commits between two releases.
///
/// Renders as `previous..commit`, or just `commit` for a first release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRange {
    /// Revision of the previous release
    pub previous: Option<String>,
    /// Revision being released
    pub commit: String,
}

impl RevisionRange {
    /// Create a range, treating an empty previous revision as absent
    pub fn new(previous: Option<&str>, commit: impl Into<String>) -> Self {
        Self {
            previous: previous.filter(|p| !p.is_empty()).map(str::to_string),
            commit: commit.into(),
        }
    }
}

impl fmt::Display for RevisionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.previous {
            Some(previous) => write!(f, "{}..{}", previous, self.commit),
            None => write!(f, "{}", self.commit),
        }
    }
}
