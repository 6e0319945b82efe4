//! Release notes assembly

use chrono::Utc;
use tracing::{debug, info, instrument};

use relnotes_core::config::{version_from_tag, ReleaseConfig};
use relnotes_core::error::{ChangelogError, Result};
use relnotes_deps::{
    ignore_dependencies, parse_dependencies, rename_dependencies, updated_deps, Dependency,
};
use relnotes_git::{GitBackend, RevisionRange};

use crate::contributors::{add_contributors, order_contributors, ContributorTally};
use crate::links::{github_commit_link, github_pr_link, linkify_changes};
use crate::parser::parse_changelog;
use crate::types::{Change, ReleaseNotes};

/// Builds [`ReleaseNotes`] for one release file
pub struct ReleaseNotesGenerator<'a, B: GitBackend + ?Sized> {
    backend: &'a B,
    config: &'a ReleaseConfig,
    linkify: bool,
}

impl<'a, B: GitBackend + ?Sized> ReleaseNotesGenerator<'a, B> {
    /// Create a generator reading from `backend`
    pub fn new(backend: &'a B, config: &'a ReleaseConfig) -> Self {
        Self {
            backend,
            config,
            linkify: false,
        }
    }

    /// Rewrite changes with GitHub commit and pull request links
    pub fn with_linkify(mut self, linkify: bool) -> Self {
        self.linkify = linkify;
        self
    }

    /// The commits covered by this release
    pub fn range(&self) -> RevisionRange {
        RevisionRange::new(self.config.previous(), self.config.commit())
    }

    /// Dependencies added or updated since the previous release
    #[instrument(skip(self), fields(commit = %self.config.commit()))]
    pub fn dependencies(&self) -> Result<Vec<Dependency>> {
        let mut current = parse_dependencies(self.backend, self.config.commit())?;
        rename_dependencies(&mut current, &self.config.rename_deps);

        let mut previous = match self.config.previous() {
            Some(previous) => parse_dependencies(self.backend, previous)?,
            None => Vec::new(),
        };
        rename_dependencies(&mut previous, &self.config.rename_deps);

        let updated = updated_deps(&previous, &current);
        Ok(ignore_dependencies(updated, &self.config.ignore_deps))
    }

    /// Parsed changelog for the range, linkified when enabled
    #[instrument(skip(self))]
    pub fn changes(&self, range: &RevisionRange) -> Result<Vec<Change>> {
        let raw = self.backend.log_oneline(range)?;
        let mut changes = parse_changelog(&raw)?;

        if self.linkify {
            let repo = self.config.github_repo.as_str();
            if repo.is_empty() {
                return Err(ChangelogError::MissingRepository.into());
            }
            linkify_changes(
                &mut changes,
                github_commit_link(self.backend, repo),
                github_pr_link(repo),
            )?;
        }

        Ok(changes)
    }

    /// Count the authors of `range` into `tally`
    #[instrument(skip(self, tally))]
    pub fn add_contributors(
        &self,
        range: &RevisionRange,
        tally: &mut ContributorTally,
    ) -> Result<()> {
        let raw = self.backend.log_authors(range)?;
        add_contributors(&raw, tally)
    }

    /// Assemble the release notes for `tag`
    #[instrument(skip(self))]
    pub fn generate(&self, tag: &str) -> Result<ReleaseNotes> {
        info!(tag, commit = %self.config.commit(), "generating release notes");
        let range = self.range();

        let dependencies = self.dependencies()?;
        let changes = self.changes(&range)?;

        let mut tally = ContributorTally::new();
        self.add_contributors(&range, &mut tally)?;
        let contributors = order_contributors(&tally);

        debug!(
            dependencies = dependencies.len(),
            changes = changes.len(),
            contributors = contributors.len(),
            "release notes assembled"
        );

        Ok(ReleaseNotes {
            project_name: self.config.project_name.clone(),
            github_repo: self.config.github_repo.clone(),
            tag: tag.to_string(),
            version: version_from_tag(tag),
            date: Utc::now(),
            pre_release: self.config.pre_release,
            preface: self.config.preface.clone(),
            previous: self.config.previous().map(str::to_string),
            notes: self.config.notes.values().cloned().collect(),
            breaking: self.config.breaking.values().cloned().collect(),
            changes,
            contributors,
            dependencies,
        })
    }
}
