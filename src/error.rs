//! Error kinds raised while checking dependents.

use thiserror::Error;

/// Boxed error returned by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure the checker can report.
///
/// Only [`CheckError::CompanionNotMergeable`] is soft; [`CheckError::CrateMatch`]
/// and [`CheckError::Verification`] end a single dependent's cycle. Everything
/// else aborts the run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The project's own graph could not be read or owns no unit.
    #[error("failed to extract build units owned by this project: {0}")]
    MetadataExtraction(String),

    /// A dependent references units this project no longer defines.
    #[error(
        "{dependent} references crates that are not part of this project: {}. \
         {dependent} needs a companion change that updates these references",
        unmatched.join(", ")
    )]
    CrateMatch {
        /// Name of the dependent project.
        dependent: String,
        /// Every unrecognized unit name, in first-seen order.
        unmatched: Vec<String>,
    },

    /// A companion line could not be parsed or points at another organization.
    #[error("invalid companion reference {raw:?}: {reason}")]
    CompanionFormat {
        /// The text after `companion:`.
        raw: String,
        /// Why the text was rejected.
        reason: String,
    },

    /// The companion change cannot be merged as-is.
    #[error("companion {repository}#{number} is not mergeable")]
    CompanionNotMergeable {
        /// Repository of the companion change.
        repository: String,
        /// Change number of the companion.
        number: u64,
    },

    /// The status or description query failed in transit.
    #[error("status query for {target} failed: {source}")]
    StatusQueryTransport {
        /// `repository#number` being queried.
        target: String,
        /// Underlying transport error.
        #[source]
        source: PortError,
    },

    /// A state the resolver does not know how to continue from.
    #[error("unknown state: {0}")]
    UnknownState(String),

    /// A version-control operation failed.
    #[error("version control operation failed: {0}")]
    Vcs(String),

    /// The verification delegate could not be run.
    #[error("verification of {dependent} could not run: {reason}")]
    Verification {
        /// Name of the dependent project.
        dependent: String,
        /// Launch failure.
        reason: String,
    },

    /// The configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CheckError {
    /// Returns `true` for errors that are recorded and skipped rather than
    /// aborting the run.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::CompanionNotMergeable { .. })
    }

    /// Returns `true` for errors that end only the current dependent's cycle.
    #[must_use]
    pub fn is_dependent_scoped(&self) -> bool {
        matches!(self, Self::CrateMatch { .. } | Self::Verification { .. })
    }
}
