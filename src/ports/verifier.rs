//! Verification delegate port.

use std::path::Path;

use crate::error::PortError;

/// Patches a dependent to use this project's code and runs its checks.
pub trait Verifier: Send + Sync {
    /// Returns `Ok(true)` if the patched dependent passed verification.
    ///
    /// # Errors
    ///
    /// Returns an error if the patch or verification step cannot be launched.
    fn patch_and_verify(&self, dependent: &str, dir: &Path) -> Result<bool, PortError>;
}
