//! Error types for relnotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelnotesError
pub type Result<T> = std::result::Result<T, RelnotesError>;

/// Main error type for relnotes operations
#[derive(Debug, Error)]
pub enum RelnotesError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Dependency manifest errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Template-related errors
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Release file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The release file does not exist
    #[error("please specify the release file as the first argument (not found: {0})")]
    ReleaseFileMissing(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading release file: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Revision could not be resolved
    #[error("Unknown revision: {0}")]
    UnknownRevision(String),

    /// File absent at the given revision
    #[error("{path} does not exist at revision {revision}")]
    FileNotFound { revision: String, path: String },

    /// The git executable is not available
    #[error("git executable not found: {0}")]
    GitNotInstalled(String),

    /// A git command exited unsuccessfully
    #[error("git {command} failed: {output}")]
    CommandFailed { command: String, output: String },

    /// Failed to spawn git
    #[error("failed to run git {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

impl GitError {
    /// Whether this error means a file is absent at a revision
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

/// Dependency manifest errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Neither supported manifest exists at the revision
    #[error(
        "finding dependency file at {revision} failed. vendor.conf error: {vendor_conf}, go.mod error: {go_mod}"
    )]
    NoManifest {
        revision: String,
        vendor_conf: String,
        go_mod: String,
    },

    /// A manifest line has the wrong shape
    #[error("invalid config format: {0}")]
    InvalidLine(String),

    /// A go.mod version that is neither a version nor a pseudo-version
    #[error("invalid go.mod file, poorly formatted version in requires section {0}")]
    InvalidVersion(String),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A log line carries no fields
    #[error("changelog line {line} has no commit hash")]
    EmptyLine { line: usize },

    /// An author line is not `email name`
    #[error("invalid author line: {0:?}")]
    InvalidAuthorLine(String),

    /// Link rewriting needs a repository
    #[error("cannot linkify changes without github_repo in the release file")]
    MissingRepository,
}

/// Template errors
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file could not be read
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
