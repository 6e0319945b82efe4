//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A release file describing one release
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Human-readable project name
    pub project_name: String,

    /// GitHub repository in `owner/repo` form, used for links
    pub github_repo: String,

    /// Revision being released
    pub commit: String,

    /// Revision of the previous release, if any
    pub previous: String,

    /// Whether this is a pre-release
    pub pre_release: bool,

    /// Free-form introduction placed at the top of the notes
    pub preface: String,

    /// Highlighted notes, keyed for stable ordering
    pub notes: BTreeMap<String, Note>,

    /// Breaking changes, keyed for stable ordering
    pub breaking: BTreeMap<String, Note>,

    /// Dependency renames keyed by a short display name
    pub rename_deps: BTreeMap<String, ProjectRename>,

    /// Dependencies left out of the notes
    pub ignore_deps: Vec<String>,

    /// Git invocation settings
    pub git: GitSettings,
}

impl ReleaseConfig {
    /// Revision being released, without surrounding whitespace
    pub fn commit(&self) -> &str {
        self.commit.trim()
    }

    /// Previous revision, treating an empty string as absent
    pub fn previous(&self) -> Option<&str> {
        let previous = self.previous.trim();
        (!previous.is_empty()).then_some(previous)
    }
}

/// A titled note in the release file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    /// Note title
    pub title: String,

    /// Note body
    pub description: String,
}

/// A dependency that moved to a new name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRename {
    /// Name before the rename
    pub old: String,

    /// Name after the rename
    pub new: String,
}

/// Settings passed to every git invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    /// `-c key=value` overrides
    pub config: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_treats_blank_as_absent() {
        let mut config = ReleaseConfig::default();
        assert_eq!(config.previous(), None);

        config.previous = "  ".to_string();
        assert_eq!(config.previous(), None);

        config.previous = "v1.0.0".to_string();
        assert_eq!(config.previous(), Some("v1.0.0"));
    }

    #[test]
    fn test_commit_is_trimmed() {
        let config = ReleaseConfig {
            commit: " v1.1.0\n".to_string(),
            ..Default::default()
        };
        assert_eq!(config.commit(), "v1.1.0");
    }

    #[test]
    fn test_deserialize_release_toml() {
        let content = r#"
project_name = "containerd"
github_repo = "containerd/containerd"
commit = "v1.2.0"
previous = "v1.1.0"
pre_release = true
preface = "Welcome"
ignore_deps = ["github.com/ignored/dep"]

[notes.runtime]
title = "Runtime"
description = "Faster shims"

[rename_deps.cri]
old = "github.com/containerd/cri"
new = "github.com/containerd/containerd/pkg/cri"

[git.config]
"core.abbrev" = "12"
"#;

        let config: ReleaseConfig = toml::from_str(content).unwrap();
        assert_eq!(config.github_repo, "containerd/containerd");
        assert!(config.pre_release);
        assert_eq!(config.notes["runtime"].title, "Runtime");
        assert_eq!(
            config.rename_deps["cri"].new,
            "github.com/containerd/containerd/pkg/cri"
        );
        assert_eq!(config.ignore_deps, vec!["github.com/ignored/dep"]);
        assert_eq!(config.git.config["core.abbrev"], "12");
        assert!(config.breaking.is_empty());
    }
}
