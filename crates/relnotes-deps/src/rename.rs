//! Dependency renames across releases

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use relnotes_core::config::ProjectRename;

use crate::types::Dependency;

/// Rename dependencies in place using a `shortname -> {old, new}` table.
///
/// Run on both releases' lists before diffing so a moved dependency is
/// compared under one name.
pub fn rename_dependencies(deps: &mut [Dependency], renames: &BTreeMap<String, ProjectRename>) {
    if renames.is_empty() {
        return;
    }

    // old name -> (shortname, new name)
    let by_old: HashMap<&str, (&str, &str)> = renames
        .iter()
        .map(|(short, r)| (r.old.as_str(), (short.as_str(), r.new.as_str())))
        .collect();

    for dep in deps.iter_mut() {
        if let Some((short, new)) = by_old.get(dep.name.as_str()) {
            debug!("Renamed {} from {} to {}", short, dep.name, new);
            dep.name = new.to_string();
        }
    }
}
