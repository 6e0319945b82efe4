//! Exit codes for the CLI

use relnotes_core::RelnotesError;

/// General error
pub const ERROR: u8 = 1;

/// Release file error
pub const CONFIG_ERROR: u8 = 2;

/// Git error
pub const GIT_ERROR: u8 = 3;

/// Malformed manifest or changelog
pub const PARSE_ERROR: u8 = 4;

/// Exit code for a failed run
pub fn for_error(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<RelnotesError>() {
        Some(RelnotesError::Config(_)) => CONFIG_ERROR,
        Some(RelnotesError::Git(_)) => GIT_ERROR,
        Some(RelnotesError::Manifest(_) | RelnotesError::Changelog(_)) => PARSE_ERROR,
        _ => ERROR,
    }
}
