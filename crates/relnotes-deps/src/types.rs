//! Dependency types

use serde::{Deserialize, Serialize};

/// A pinned dependency from a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Import path, unique within one manifest
    pub name: String,
    /// Short commit hash or version
    pub commit: String,
    /// Where the dependency is cloned from
    pub clone_url: String,
    /// Commit at the previous release, set only for updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl Dependency {
    /// Create a dependency with the default `git://<name>` clone URL
    pub fn new(name: impl Into<String>, commit: impl Into<String>) -> Self {
        let name = name.into();
        let clone_url = default_clone_url(&name);
        Self {
            name,
            commit: commit.into(),
            clone_url,
            previous: None,
        }
    }

    /// Set an explicit clone URL
    pub fn with_clone_url(mut self, url: impl Into<String>) -> Self {
        self.clone_url = url.into();
        self
    }
}

/// Clone URL used when a manifest does not name one
pub(crate) fn default_clone_url(name: &str) -> String {
    format!("git://{}", name)
}
