//! Log queries over a revision range

use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::RevisionRange;

/// `git log` format producing one `email name` line per commit
const AUTHOR_FORMAT: &str = "--format=%aE %aN";

impl GitRepo {
    /// Raw `git log --oneline` output for the range, newest first
    #[instrument(skip(self), fields(range = %range))]
    pub fn log_oneline(&self, range: &RevisionRange) -> Result<String> {
        let range = range.to_string();
        let raw = self.cli.run(&["log", "--oneline", &range])?;
        debug!(lines = raw.lines().count(), "read oneline log");
        Ok(raw)
    }

    /// Raw `email name` author lines for the range, one per commit
    #[instrument(skip(self), fields(range = %range))]
    pub fn log_authors(&self, range: &RevisionRange) -> Result<String> {
        let range = range.to_string();
        let raw = self.cli.run(&["log", AUTHOR_FORMAT, &range])?;
        debug!(lines = raw.lines().count(), "read author log");
        Ok(raw)
    }
}
