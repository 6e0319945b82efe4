//! relnotes Git - Repository introspection for release notes
//!
//! This crate reads manifests as they existed at a revision, runs log
//! queries over revision ranges and resolves abbreviated hashes.

mod backend;
mod command;
mod files;
mod log;
mod repository;
pub mod types;

pub use backend::GitBackend;
pub use command::GitCli;
pub use repository::{GitRepo, Result};
pub use types::RevisionRange;
