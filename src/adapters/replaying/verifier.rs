//! Replaying adapter for the `Verifier` port.

use std::path::Path;
use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;
use crate::ports::Verifier;

/// Replays recorded verification outcomes from a cassette.
pub struct ReplayingVerifier {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingVerifier {
    /// Creates a new replaying verifier from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Verifier for ReplayingVerifier {
    fn patch_and_verify(&self, _dependent: &str, _dir: &Path) -> Result<bool, PortError> {
        replay_result(&self.replayer, "verifier", "patch_and_verify")
    }
}
