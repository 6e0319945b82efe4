//! Release file validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::ReleaseConfig;

/// Validate a release file
pub fn validate_release(config: &ReleaseConfig) -> Result<()> {
    debug!("validating release file");
    validate_commit(config)?;
    validate_repo(config)?;
    validate_renames(config)?;
    debug!("release file validation passed");
    Ok(())
}

fn validate_commit(config: &ReleaseConfig) -> Result<()> {
    if config.commit().is_empty() {
        return Err(ConfigError::MissingField("commit".to_string()).into());
    }
    Ok(())
}

fn validate_repo(config: &ReleaseConfig) -> Result<()> {
    // Optional, but must be `owner/repo` when present
    if config.github_repo.is_empty() {
        return Ok(());
    }

    let parts: Vec<&str> = config.github_repo.split('/').collect();
    if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: "github_repo".to_string(),
            message: format!("expected owner/repo, got {:?}", config.github_repo),
        }
        .into());
    }

    Ok(())
}

fn validate_renames(config: &ReleaseConfig) -> Result<()> {
    if !config.rename_deps.is_empty() {
        debug!(count = config.rename_deps.len(), "validating renames");
    }
    for (short, rename) in &config.rename_deps {
        if rename.old.is_empty() || rename.new.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("rename_deps.{}", short),
                message: "old and new names cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
