//! relnotes Core - Shared types for release notes generation
//!
//! This crate provides the error taxonomy and the release file
//! configuration used by the other relnotes crates.

pub mod config;
pub mod error;

pub use config::{GitSettings, Note, ProjectRename, ReleaseConfig};
pub use error::{RelnotesError, Result};
