//! Running the git executable

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, instrument};

use relnotes_core::config::GitSettings;
use relnotes_core::error::GitError;

use crate::repository::Result;

/// Runs git commands in a working directory with explicit `-c` overrides
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
    config: BTreeMap<String, String>,
}

impl GitCli {
    /// Create a runner for `workdir` using the overrides in `settings`
    pub fn new(workdir: &Path, settings: &GitSettings) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
            config: settings.config.clone(),
        }
    }

    /// Full argument list: one `-c key=value` pair per override, then `args`
    pub fn command_line(&self, args: &[&str]) -> Vec<String> {
        let mut out = Vec::with_capacity(self.config.len() * 2 + args.len());
        for (key, value) in &self.config {
            out.push("-c".to_string());
            out.push(format!("{}={}", key, value));
        }
        out.extend(args.iter().map(|a| a.to_string()));
        out
    }

    /// Run git and return its stdout.
    ///
    /// A non-zero exit becomes [`GitError::CommandFailed`] carrying stdout
    /// and stderr together.
    #[instrument(skip(self), fields(workdir = %self.workdir.display()))]
    pub fn run(&self, args: &[&str]) -> Result<String> {
        let start = std::time::Instant::now();
        let command = args.join(" ");
        debug!(command = %command, overrides = self.config.len(), "running git");

        let output = Command::new("git")
            .current_dir(&self.workdir)
            .args(self.command_line(args))
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::GitNotInstalled(e.to_string())
                } else {
                    GitError::Spawn {
                        command: command.clone(),
                        source: e,
                    }
                }
            })?;

        info!(
            command = %command,
            duration_ms = start.elapsed().as_millis(),
            success = output.status.success(),
            "git (CLI)"
        );

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(GitError::CommandFailed {
                command,
                output: combined.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
