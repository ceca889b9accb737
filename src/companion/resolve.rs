//! Resolving a companion reference into a checkout target.

use tracing::{debug, info, warn};

use super::{parse_reference, CompanionReference, CompanionStatus};
use crate::error::CheckError;
use crate::ports::ChangeForge;

/// Terminal state of one companion reference.
#[derive(Debug)]
pub enum Resolution {
    /// The change is mergeable and can be checked out at `status.head_sha`.
    CheckoutReady {
        /// The parsed reference.
        reference: CompanionReference,
        /// Its head coordinates.
        status: CompanionStatus,
    },
    /// The change cannot be merged; the reference is skipped and `error` is
    /// recorded as a soft failure.
    NotMergeable {
        /// The parsed reference.
        reference: CompanionReference,
        /// The soft failure to record.
        error: CheckError,
    },
}

impl Resolution {
    /// The reference this resolution is about.
    #[must_use]
    pub fn reference(&self) -> &CompanionReference {
        match self {
            Self::CheckoutReady { reference, .. } | Self::NotMergeable { reference, .. } => {
                reference
            }
        }
    }
}

/// Queries the status of `reference` in `org`.
///
/// # Errors
///
/// Returns [`CheckError::StatusQueryTransport`] if the forge call fails and
/// [`CheckError::UnknownState`] if the forge has not decided mergeability.
pub fn resolve_status(
    forge: &dyn ChangeForge,
    org: &str,
    reference: &CompanionReference,
) -> Result<CompanionStatus, CheckError> {
    let status = forge
        .status(org, &reference.repository, reference.number)
        .map_err(|source| CheckError::StatusQueryTransport { target: reference.to_string(), source })?;

    let Some(mergeable) = status.mergeable else {
        return Err(CheckError::UnknownState(format!(
            "mergeability of {reference} has not been computed by the forge"
        )));
    };

    Ok(CompanionStatus { mergeable, head_ref: status.head_ref, head_sha: status.head_sha })
}

/// Parses `raw` and resolves it to a terminal state.
///
/// # Errors
///
/// Propagates the fatal errors of [`parse_reference`] and [`resolve_status`].
/// A change that is not mergeable is not an error here; it is returned as
/// [`Resolution::NotMergeable`].
pub fn resolve(forge: &dyn ChangeForge, org: &str, raw: &str) -> Result<Resolution, CheckError> {
    let reference = parse_reference(raw, org)?;
    debug!(companion = %reference, "parsed companion reference");

    let status = resolve_status(forge, org, &reference)?;
    debug!(companion = %reference, mergeable = status.mergeable, head = %status.head_sha, "fetched companion status");

    if status.mergeable {
        info!(companion = %reference, head_ref = %status.head_ref, "companion ready for checkout");
        Ok(Resolution::CheckoutReady { reference, status })
    } else {
        warn!(companion = %reference, "companion is not mergeable");
        let error = CheckError::CompanionNotMergeable {
            repository: reference.repository.clone(),
            number: reference.number,
        };
        Ok(Resolution::NotMergeable { reference, error })
    }
}
