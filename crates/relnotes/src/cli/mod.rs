//! CLI definition and command handling

pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use relnotes_changelog::template::resolve_template;
use relnotes_changelog::{
    JsonFormatter, MarkdownFormatter, NotesFormatter, ReleaseNotes, ReleaseNotesGenerator,
};
use relnotes_core::config::{load_release, parse_tag, ReleaseConfig, DEFAULT_TEMPLATE_FILE};
use relnotes_core::RelnotesError;
use relnotes_git::GitRepo;

/// relnotes - Generate release notes from a release file and git history
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Release file; its name without extension is the release tag
    #[arg(value_name = "RELEASE_FILE")]
    pub release_file: PathBuf,

    /// Template file
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_FILE)]
    pub template: PathBuf,

    /// Add GitHub links to commits and pull requests
    #[arg(short, long)]
    pub linkify: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Print the notes without writing any file
    #[arg(short = 'n', long)]
    pub dry: bool,

    /// Write the notes to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Extra git configuration, overriding the release file
    #[arg(long = "git-config", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub git_config: Vec<(String, String)>,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown rendered through the template
    #[default]
    Text,
    /// JSON output
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        info!(
            release_file = %self.release_file.display(),
            linkify = self.linkify,
            dry = self.dry,
            "executing relnotes"
        );

        let mut config = load_release(&self.release_file)?;
        self.apply_git_config(&mut config);
        let tag = parse_tag(&self.release_file);

        let cwd = std::env::current_dir()?;
        let repo = GitRepo::discover(&cwd)
            .map_err(RelnotesError::from)?
            .with_settings(&config.git);

        let notes = ReleaseNotesGenerator::new(&repo, &config)
            .with_linkify(self.linkify)
            .generate(&tag)?;

        let rendered = self.render(&notes)?;
        self.emit(&tag, &rendered)
    }

    /// Merge `--git-config` pairs over the release file's settings
    fn apply_git_config(&self, config: &mut ReleaseConfig) {
        for (key, value) in &self.git_config {
            config.git.config.insert(key.clone(), value.clone());
        }
    }

    fn render(&self, notes: &ReleaseNotes) -> anyhow::Result<String> {
        let rendered = match self.format {
            OutputFormat::Json => JsonFormatter.format(notes)?,
            OutputFormat::Text => {
                let template = resolve_template(&self.template)?;
                MarkdownFormatter::new()
                    .with_template(template)
                    .format(notes)?
            }
        };
        Ok(rendered)
    }

    fn emit(&self, tag: &str, rendered: &str) -> anyhow::Result<()> {
        match &self.output {
            Some(path) if !self.dry => {
                write_notes(path, rendered)?;
                output::success(&format!(
                    "Release notes for {} written to {}",
                    output::tag_style().apply_to(tag),
                    output::path_style().apply_to(path.display())
                ));
            }
            Some(path) => {
                output::info(&format!(
                    "Dry run, not writing {}",
                    output::path_style().apply_to(path.display())
                ));
                println!("{}", rendered.trim_end());
            }
            None => println!("{}", rendered.trim_end()),
        }
        Ok(())
    }
}

fn write_notes(path: &Path, rendered: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut content = rendered.trim_end().to_string();
    content.push('\n');
    std::fs::write(path, content)
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in `{}`", s));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["relnotes", "v1.2.0.toml"]).unwrap();
        assert_eq!(cli.release_file, PathBuf::from("v1.2.0.toml"));
        assert_eq!(cli.template, PathBuf::from("TMPL"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.linkify && !cli.debug && !cli.dry);
        assert!(cli.git_config.is_empty());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "relnotes",
            "-l",
            "-d",
            "-n",
            "-t",
            "notes.tmpl",
            "--format",
            "json",
            "--git-config",
            "core.abbrev=12",
            "--git-config",
            "log.showSignature=false",
            "v1.2.0.toml",
        ])
        .unwrap();

        assert!(cli.linkify && cli.debug && cli.dry);
        assert_eq!(cli.template, PathBuf::from("notes.tmpl"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(
            cli.git_config,
            vec![
                ("core.abbrev".to_string(), "12".to_string()),
                ("log.showSignature".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_release_file_is_required() {
        assert!(Cli::try_parse_from(["relnotes"]).is_err());
    }

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("user.name=Release Bot").unwrap(),
            ("user.name".to_string(), "Release Bot".to_string())
        );
        assert_eq!(
            parse_key_val("core.pager=").unwrap(),
            ("core.pager".to_string(), String::new())
        );
        assert!(parse_key_val("core.pager").is_err());
        assert!(parse_key_val("=value").is_err());
    }

    #[test]
    fn test_git_config_overrides_release_file() {
        let cli = Cli::try_parse_from([
            "relnotes",
            "--git-config",
            "core.abbrev=12",
            "v1.2.0.toml",
        ])
        .unwrap();

        let mut config = ReleaseConfig::default();
        config
            .git
            .config
            .insert("core.abbrev".to_string(), "7".to_string());
        config
            .git
            .config
            .insert("color.ui".to_string(), "never".to_string());

        cli.apply_git_config(&mut config);
        assert_eq!(config.git.config["core.abbrev"], "12");
        assert_eq!(config.git.config["color.ui"], "never");
    }

    #[test]
    fn test_emit_writes_output_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("NOTES.md");
        let cli = Cli::try_parse_from([
            "relnotes",
            "-o",
            path.to_str().unwrap(),
            "v1.2.0.toml",
        ])
        .unwrap();

        cli.emit("v1.2.0", "# demo 1.2.0\n\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# demo 1.2.0\n");
    }

    #[test]
    fn test_emit_dry_run_skips_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("NOTES.md");
        let cli = Cli::try_parse_from([
            "relnotes",
            "--dry",
            "-o",
            path.to_str().unwrap(),
            "v1.2.0.toml",
        ])
        .unwrap();

        cli.emit("v1.2.0", "# demo 1.2.0").unwrap();
        assert!(!path.exists());
    }
}
