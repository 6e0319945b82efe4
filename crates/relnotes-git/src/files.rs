//! Reading objects at a revision

use std::path::Path;

use git2::ErrorCode;
use tracing::{debug, instrument};

use relnotes_core::error::GitError;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Contents of `path` as it existed at `revision`.
    ///
    /// A path missing from that tree is reported as
    /// [`GitError::FileNotFound`].
    #[instrument(skip(self))]
    pub fn file_at_revision(&self, revision: &str, path: &str) -> Result<String> {
        let tree = self.resolve(revision)?.peel_to_tree()?;

        let entry = match tree.get_path(Path::new(path)) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => {
                debug!(revision, path, "file not present at revision");
                return Err(GitError::FileNotFound {
                    revision: revision.to_string(),
                    path: path.to_string(),
                });
            }
            Err(e) => return Err(GitError::Git2(e)),
        };

        let blob = entry.to_object(&self.repo)?.peel_to_blob()?;
        debug!(revision, path, size = blob.size(), "read file at revision");
        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }

    /// Full commit hash for an abbreviated hash or other revision
    #[instrument(skip(self))]
    pub fn resolve_commit(&self, revision: &str) -> Result<String> {
        let commit = self.resolve(revision)?.peel_to_commit()?;
        Ok(commit.id().to_string())
    }

    fn resolve(&self, revision: &str) -> Result<git2::Object<'_>> {
        self.repo.revparse_single(revision).map_err(|e| {
            if e.code() == ErrorCode::NotFound || e.code() == ErrorCode::Ambiguous {
                GitError::UnknownRevision(revision.to_string())
            } else {
                GitError::Git2(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use tempfile::TempDir;

    fn setup_repo() -> (TempDir, GitRepo, String) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();

        std::fs::write(
            temp.path().join("vendor.conf"),
            "github.com/pkg/errors v0.8.0\n",
        )
        .unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("vendor.conf")).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "Add vendor.conf", &tree, &[])
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo, oid.to_string())
    }

    #[test]
    fn test_file_at_revision() {
        let (_temp, repo, _) = setup_repo();
        let content = repo.file_at_revision("HEAD", "vendor.conf").unwrap();
        assert_eq!(content, "github.com/pkg/errors v0.8.0\n");
    }

    #[test]
    fn test_file_missing_at_revision() {
        let (_temp, repo, _) = setup_repo();
        let err = repo.file_at_revision("HEAD", "go.mod").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unknown_revision_is_not_a_missing_file() {
        let (_temp, repo, _) = setup_repo();
        let err = repo.file_at_revision("v9.9.9", "vendor.conf").unwrap_err();
        assert!(matches!(err, GitError::UnknownRevision(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_resolve_short_hash() {
        let (_temp, repo, full) = setup_repo();
        assert_eq!(repo.resolve_commit(&full[..7]).unwrap(), full);
        assert_eq!(repo.resolve_commit("HEAD").unwrap(), full);
    }
}
