//! Version-control port.

use std::path::Path;

use crate::error::PortError;

/// Performs the checkouts a check run needs.
pub trait Vcs: Send + Sync {
    /// Merges `origin/<branch>` into the branch checked out at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or merge fails.
    fn merge_branch(&self, dir: &Path, branch: &str) -> Result<(), PortError>;

    /// Clones the default branch of `url` into `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone fails.
    fn clone_default(&self, url: &str, dir: &Path) -> Result<(), PortError>;

    /// Fetches change `number` into the clone at `dir` and checks out
    /// `head_sha` detached. `head_ref` names the change's branch for logs only.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or checkout fails.
    fn checkout_change(
        &self,
        dir: &Path,
        number: u64,
        head_ref: &str,
        head_sha: &str,
    ) -> Result<(), PortError>;
}
