//! go.mod parsing
//!
//! Only the first `require ( ... )` block is read. `replace` directives are
//! not applied, so a replaced module is reported at its required version.

use tracing::{debug, instrument};

use relnotes_core::error::{ManifestError, Result};

use crate::sanitize::sanitize_line;
use crate::types::Dependency;

/// Suffix go adds to pre-module major versions
const INCOMPATIBLE_SUFFIX: &str = "+incompatible";

/// Parse the require block of go.mod content
#[instrument(skip(content), fields(len = content.len()))]
pub fn parse(content: &str) -> Result<Vec<Dependency>> {
    let mut deps = Vec::new();
    let mut in_require = false;

    for line in content.lines() {
        let line = sanitize_line(line, "//");
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();

        if !in_require {
            in_require = parts == ["require", "("];
            continue;
        }

        if parts.len() != 2 {
            if parts == [")"] {
                break;
            }
            return Err(ManifestError::InvalidLine(line.to_string()).into());
        }

        let commit = commit_or_version(parts[1])
            .ok_or_else(|| ManifestError::InvalidVersion(parts[1].to_string()))?;

        deps.push(Dependency::new(parts[0], commit));
    }

    debug!(count = deps.len(), found_require = in_require, "parsed go.mod");
    Ok(deps)
}

/// Resolve a go.mod version to the identifier shown in release notes.
///
/// `v1.2.3` and `v1.2.3-rc1` are kept (minus `+incompatible`); for a
/// pseudo-version `v0.0.0-20190101000000-abcdef123456` the commit is used.
pub fn commit_or_version(version: &str) -> Option<&str> {
    let dash_fields: Vec<&str> = version.split('-').filter(|f| !f.is_empty()).collect();

    match dash_fields.len() {
        1 | 2 => match version.find(INCOMPATIBLE_SUFFIX) {
            Some(idx) if idx > 0 => Some(&version[..idx]),
            _ => Some(version),
        },
        3 => Some(dash_fields[2]),
        _ => None,
    }
}
