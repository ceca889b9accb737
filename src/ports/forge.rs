//! Code forge port for change descriptions and status.

use serde::{Deserialize, Serialize};

use crate::error::PortError;

/// Status of a change as reported by the forge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStatus {
    /// `None` while the forge has not computed mergeability yet.
    pub mergeable: Option<bool>,
    /// Branch name of the change's head.
    pub head_ref: String,
    /// Commit id of the change's head.
    pub head_sha: String,
}

/// Queries a code forge (e.g. GitHub) for change requests.
///
/// Both calls block and are not retried.
pub trait ChangeForge: Send + Sync {
    /// Returns the free-text description of a change. An absent body is an
    /// empty string.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is unreadable.
    fn description(&self, org: &str, repo: &str, number: u64) -> Result<String, PortError>;

    /// Returns the mergeability and head coordinates of a change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is unreadable.
    fn status(&self, org: &str, repo: &str, number: u64) -> Result<ChangeStatus, PortError>;
}
