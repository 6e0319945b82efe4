//! GitHub links for changelog entries

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, instrument};

use relnotes_core::error::Result;
use relnotes_git::GitBackend;

use crate::types::Change;

/// Subject of a GitHub merge commit
static MERGE_PR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix>Merge pull request )#(?P<number>[0-9]+)").expect("Invalid regex")
});

/// Commit link builder: resolves the full hash through `backend`
pub fn github_commit_link<'a, B>(
    backend: &'a B,
    repo: &'a str,
) -> impl Fn(&Change) -> Result<String> + 'a
where
    B: GitBackend + ?Sized,
{
    move |change: &Change| {
        let full = backend.resolve_commit(&change.commit)?;
        Ok(format!(
            "https://github.com/{}/commit/{}",
            repo,
            full.trim()
        ))
    }
}

/// Description rewriter: links the number in `Merge pull request #N`
pub fn github_pr_link(repo: &str) -> impl Fn(&Change) -> Result<String> + '_ {
    move |change: &Change| {
        let description = MERGE_PR_REGEX.replace(&change.description, |caps: &Captures<'_>| {
            let number = &caps["number"];
            format!(
                "{}[#{}](https://github.com/{}/pull/{})",
                &caps["prefix"], number, repo, number
            )
        });
        Ok(description.into_owned())
    }
}

/// Rewrite every change with a commit link and a linked description.
///
/// For each change the commit link is computed first, then the description;
/// the first failure stops the pass.
#[instrument(skip_all, fields(count = changes.len()))]
pub fn linkify_changes<C, D>(changes: &mut [Change], commit: C, description: D) -> Result<()>
where
    C: Fn(&Change) -> Result<String>,
    D: Fn(&Change) -> Result<String>,
{
    for change in changes.iter_mut() {
        let commit_link = commit(&*change)?;
        let linked = description(&*change)?;

        change.commit = format!("[`{}`]({})", change.commit, commit_link);
        change.description = linked;
    }

    debug!("linkified changes");
    Ok(())
}
