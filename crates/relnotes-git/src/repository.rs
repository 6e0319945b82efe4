//! Git repository operations

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{info, instrument};

use relnotes_core::config::GitSettings;
use relnotes_core::error::GitError;

use crate::command::GitCli;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Git repository wrapper
pub struct GitRepo {
    pub(crate) repo: Repository,
    pub(crate) cli: GitCli,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at the given path
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "opening git repository");
        let repo = Repository::open(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::RepositoryNotFound(path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        Ok(Self::from_repository(repo, path.to_path_buf()))
    }

    /// Discover and open a repository by searching parent directories
    #[instrument(fields(start_path = %start_path.display()))]
    pub fn discover(start_path: &Path) -> Result<Self> {
        info!(start_path = %start_path.display(), "discovering git repository");
        let repo = Repository::discover(start_path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository(start_path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self::from_repository(repo, path))
    }

    fn from_repository(repo: Repository, path: PathBuf) -> Self {
        let cli = GitCli::new(&path, &GitSettings::default());
        Self { repo, cli, path }
    }

    /// Apply `-c key=value` overrides to every git command this repository runs
    pub fn with_settings(mut self, settings: &GitSettings) -> Self {
        self.cli = GitCli::new(&self.path, settings);
        self
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
