//! vendor.conf parsing
//!
//! One dependency per line: `name commit [clone-url]`, `#` comments.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use relnotes_core::error::{ManifestError, Result};

use crate::sanitize::sanitize_line;
use crate::types::Dependency;

/// Full-length commit hashes are shortened to match go.mod pseudo-versions
static FULL_HASH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{40}$").expect("Invalid regex"));

/// Length of the shortened hash
const SHORT_HASH_LEN: usize = 12;

/// Parse vendor.conf content
#[instrument(skip(content), fields(len = content.len()))]
pub fn parse(content: &str) -> Result<Vec<Dependency>> {
    let mut deps = Vec::new();

    for line in content.lines() {
        let line = sanitize_line(line, "#");
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(ManifestError::InvalidLine(line.to_string()).into());
        }

        let mut commit = parts[1];
        if FULL_HASH_REGEX.is_match(commit) {
            commit = &commit[..SHORT_HASH_LEN];
        }

        let dep = Dependency::new(parts[0], commit);
        deps.push(match parts.get(2) {
            Some(url) => dep.with_clone_url(*url),
            None => dep,
        });
    }

    debug!(count = deps.len(), "parsed vendor.conf");
    Ok(deps)
}
