//! relnotes Deps - Dependency changes between two revisions
//!
//! This crate parses `vendor.conf` and `go.mod` manifests, normalizes
//! renamed dependencies and computes which dependencies were added or
//! updated.

mod diff;
pub mod manifest;
mod rename;
mod sanitize;
pub mod types;

pub use diff::{ignore_dependencies, updated_deps};
pub use manifest::{parse_dependencies, ManifestFormat};
pub use rename::rename_dependencies;
pub use sanitize::sanitize_line;
pub use types::Dependency;
