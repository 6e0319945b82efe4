//! Release file loading

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::release_file_extensions;
use super::types::ReleaseConfig;
use super::validation::validate_release;

/// Load a release file, choosing the format from its extension
pub fn load_release(path: &Path) -> Result<ReleaseConfig> {
    let format = if path
        .extension()
        .is_some_and(|e| e == "yaml" || e == "yml")
    {
        "YAML"
    } else {
        "TOML"
    };
    info!(path = %path.display(), format, "loading release file");

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ReleaseFileMissing(path.to_path_buf())
        } else {
            ConfigError::Io(e)
        }
    })?;

    let config: ReleaseConfig = if format == "YAML" {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    } else {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    };

    validate_release(&config)?;
    debug!(path = %path.display(), "release file loaded and validated");
    Ok(config)
}

/// Derive the release tag from the release file name.
///
/// `releases/v1.2.0.toml` becomes `v1.2.0`.
pub fn parse_tag(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    for ext in release_file_extensions() {
        if let Some(stem) = name.strip_suffix(&format!(".{}", ext)) {
            return stem.to_string();
        }
    }
    name
}

/// Version string for a tag (`v1.2.0` becomes `1.2.0`)
pub fn version_from_tag(tag: &str) -> String {
    tag.strip_prefix('v').unwrap_or(tag).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelnotesError;
    use tempfile::TempDir;

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag(Path::new("releases/v1.2.0.toml")), "v1.2.0");
        assert_eq!(parse_tag(Path::new("v1.2.0-rc.1.yaml")), "v1.2.0-rc.1");
        assert_eq!(parse_tag(Path::new("v2.0.0")), "v2.0.0");
    }

    #[test]
    fn test_version_from_tag() {
        assert_eq!(version_from_tag("v1.2.0"), "1.2.0");
        assert_eq!(version_from_tag("1.2.0"), "1.2.0");
    }

    #[test]
    fn test_load_release_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("v1.1.0.toml");
        std::fs::write(
            &path,
            "project_name = \"demo\"\ngithub_repo = \"org/demo\"\ncommit = \"v1.1.0\"\nprevious = \"v1.0.0\"\n",
        )
        .unwrap();

        let config = load_release(&path).unwrap();
        assert_eq!(config.project_name, "demo");
        assert_eq!(config.previous(), Some("v1.0.0"));
    }

    #[test]
    fn test_load_release_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("v1.1.0.yaml");
        std::fs::write(
            &path,
            "project_name: demo\ngithub_repo: org/demo\ncommit: v1.1.0\nrename_deps:\n  cri:\n    old: a/cri\n    new: b/cri\n",
        )
        .unwrap();

        let config = load_release(&path).unwrap();
        assert_eq!(config.rename_deps["cri"].old, "a/cri");
    }

    #[test]
    fn test_missing_release_file() {
        let temp = TempDir::new().unwrap();
        let result = load_release(&temp.path().join("missing.toml"));
        assert!(matches!(
            result,
            Err(RelnotesError::Config(ConfigError::ReleaseFileMissing(_)))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "commit = [").unwrap();

        let result = load_release(&path);
        assert!(matches!(
            result,
            Err(RelnotesError::Config(ConfigError::TomlError(_)))
        ));
    }
}
