//! Companion references: cross-repository changes named in a change description.
//!
//! A description line such as `companion: polkadot#42` asks for the dependent
//! `polkadot` to be checked at change 42 instead of at its default branch.

pub mod extract;
pub mod reference;
pub mod resolve;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use extract::extract_references;
pub use reference::parse_reference;
pub use resolve::{resolve, resolve_status, Resolution};

/// A parsed companion: a change in another repository of the same organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanionReference {
    /// Repository name, without organization.
    pub repository: String,
    /// Change (pull request) number.
    pub number: u64,
}

impl fmt::Display for CompanionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repository, self.number)
    }
}

/// Mergeability and checkout coordinates of a companion's head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionStatus {
    /// Whether the change can be merged into its base.
    pub mergeable: bool,
    /// Branch name of the change's head.
    pub head_ref: String,
    /// Commit id of the change's head.
    pub head_sha: String,
}
