//! Dependency manifests
//!
//! Two formats are understood: `vendor.conf` (tried first) and `go.mod`.

pub mod go_mod;
pub mod vendor_conf;

use tracing::{debug, info, instrument};

use relnotes_core::config::{GO_MOD, VENDOR_CONF};
use relnotes_core::error::{ManifestError, Result};
use relnotes_git::GitBackend;

use crate::types::Dependency;

/// A supported manifest format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// Line-oriented `name commit [url]` file
    VendorConf,
    /// Go modules `require` block
    GoMod,
}

impl ManifestFormat {
    /// Lookup order at each revision
    pub const ALL: [ManifestFormat; 2] = [ManifestFormat::VendorConf, ManifestFormat::GoMod];

    /// File name of the manifest at the repository root
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::VendorConf => VENDOR_CONF,
            Self::GoMod => GO_MOD,
        }
    }

    /// Parse manifest content in this format
    pub fn parse(&self, content: &str) -> Result<Vec<Dependency>> {
        match self {
            Self::VendorConf => vendor_conf::parse(content),
            Self::GoMod => go_mod::parse(content),
        }
    }
}

/// Dependencies pinned at `revision`.
///
/// A missing `vendor.conf` falls back to `go.mod`; when both are missing the
/// error reports both lookups. Other repository errors are returned as is.
#[instrument(skip(backend))]
pub fn parse_dependencies<B: GitBackend + ?Sized>(
    backend: &B,
    revision: &str,
) -> Result<Vec<Dependency>> {
    let mut misses = Vec::with_capacity(ManifestFormat::ALL.len());

    for format in ManifestFormat::ALL {
        match backend.file_at_revision(revision, format.file_name()) {
            Ok(content) => {
                let deps = format.parse(&content)?;
                info!(
                    revision,
                    manifest = format.file_name(),
                    count = deps.len(),
                    "loaded dependencies"
                );
                return Ok(deps);
            }
            Err(e) if e.is_not_found() => {
                debug!(revision, manifest = format.file_name(), "manifest not found");
                misses.push(e.to_string());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(ManifestError::NoManifest {
        revision: revision.to_string(),
        vendor_conf: misses[0].clone(),
        go_mod: misses[1].clone(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use relnotes_core::error::{GitError, RelnotesError};
    use relnotes_git::RevisionRange;

    /// In-memory backend keyed by `(revision, path)`
    #[derive(Default)]
    struct FakeBackend {
        files: HashMap<(String, String), String>,
        broken: bool,
    }

    impl FakeBackend {
        fn with_file(mut self, revision: &str, path: &str, content: &str) -> Self {
            self.files
                .insert((revision.to_string(), path.to_string()), content.to_string());
            self
        }
    }

    impl GitBackend for FakeBackend {
        fn file_at_revision(&self, revision: &str, path: &str) -> relnotes_git::Result<String> {
            if self.broken {
                return Err(GitError::UnknownRevision(revision.to_string()));
            }
            self.files
                .get(&(revision.to_string(), path.to_string()))
                .cloned()
                .ok_or_else(|| GitError::FileNotFound {
                    revision: revision.to_string(),
                    path: path.to_string(),
                })
        }

        fn log_oneline(&self, _range: &RevisionRange) -> relnotes_git::Result<String> {
            Ok(String::new())
        }

        fn log_authors(&self, _range: &RevisionRange) -> relnotes_git::Result<String> {
            Ok(String::new())
        }

        fn resolve_commit(&self, revision: &str) -> relnotes_git::Result<String> {
            Ok(revision.to_string())
        }
    }

    #[test]
    fn test_vendor_conf_preferred() {
        let backend = FakeBackend::default()
            .with_file("v1", "vendor.conf", "github.com/a/a v1.0.0\n")
            .with_file("v1", "go.mod", "require (\n\tgithub.com/b/b v2.0.0\n)\n");

        let deps = parse_dependencies(&backend, "v1").unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "github.com/a/a");
    }

    #[test]
    fn test_falls_back_to_go_mod() {
        let backend = FakeBackend::default().with_file(
            "v2",
            "go.mod",
            "module x\n\nrequire (\n\tgithub.com/b/b v2.0.0\n)\n",
        );

        let deps = parse_dependencies(&backend, "v2").unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "github.com/b/b");
    }

    #[test]
    fn test_neither_manifest_reports_both() {
        let backend = FakeBackend::default();

        let err = parse_dependencies(&backend, "v3").unwrap_err();
        match err {
            RelnotesError::Manifest(ManifestError::NoManifest {
                revision,
                vendor_conf,
                go_mod,
            }) => {
                assert_eq!(revision, "v3");
                assert!(vendor_conf.contains("vendor.conf"));
                assert!(go_mod.contains("go.mod"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_other_errors_not_absorbed() {
        let backend = FakeBackend {
            broken: true,
            ..Default::default()
        };

        let err = parse_dependencies(&backend, "v4").unwrap_err();
        assert!(matches!(
            err,
            RelnotesError::Git(GitError::UnknownRevision(_))
        ));
    }

    #[test]
    fn test_parse_error_not_absorbed() {
        let backend = FakeBackend::default().with_file("v1", "vendor.conf", "only-one-field\n");
        assert!(parse_dependencies(&backend, "v1").is_err());
    }
}
