//! Dependency comparison between two releases

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, instrument};

use crate::types::Dependency;

/// Dependencies that are new in `current` or whose commit changed.
///
/// Updated records carry the old commit in `previous`. The result is ordered
/// by dependency name.
#[instrument(skip_all, fields(previous = previous.len(), current = current.len()))]
pub fn updated_deps(previous: &[Dependency], current: &[Dependency]) -> Vec<Dependency> {
    let previous = to_dep_map(previous);
    let current = to_dep_map(current);

    let mut updated = Vec::new();
    for (name, dep) in current {
        match previous.get(name) {
            None => updated.push(dep.clone()),
            Some(old) if old.commit != dep.commit => updated.push(Dependency {
                previous: Some(old.commit.clone()),
                ..dep.clone()
            }),
            Some(_) => {}
        }
    }

    debug!(count = updated.len(), "computed updated dependencies");
    updated
}

/// Drop dependencies whose names are listed in `ignore`
pub fn ignore_dependencies(deps: Vec<Dependency>, ignore: &[String]) -> Vec<Dependency> {
    if ignore.is_empty() {
        return deps;
    }
    let ignore: HashSet<&str> = ignore.iter().map(String::as_str).collect();
    deps.into_iter()
        .filter(|d| {
            let keep = !ignore.contains(d.name.as_str());
            if !keep {
                debug!(name = %d.name, "ignoring dependency");
            }
            keep
        })
        .collect()
}

/// Last entry wins on duplicate names
fn to_dep_map(deps: &[Dependency]) -> BTreeMap<&str, &Dependency> {
    deps.iter().map(|d| (d.name.as_str(), d)).collect()
}
