//! Replaying adapter for the `ChangeForge` port.

use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;
use crate::ports::{ChangeForge, ChangeStatus};

/// Replays recorded forge responses from a cassette.
pub struct ReplayingForge {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingForge {
    /// Creates a new replaying forge from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ChangeForge for ReplayingForge {
    fn description(&self, _org: &str, _repo: &str, _number: u64) -> Result<String, PortError> {
        replay_result(&self.replayer, "forge", "description")
    }

    fn status(&self, _org: &str, _repo: &str, _number: u64) -> Result<ChangeStatus, PortError> {
        replay_result(&self.replayer, "forge", "status")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::adapters::replaying::testing::replayer;

    #[test]
    fn replays_status_with_unknown_mergeability() {
        let forge = ReplayingForge::new(replayer(&[(
            "forge",
            "status",
            json!({"ok": {"mergeable": null, "head_ref": "feature", "head_sha": "abc"}}),
        )]));
        let status = forge.status("paritytech", "polkadot", 42).unwrap();
        assert_eq!(status.mergeable, None);
        assert_eq!(status.head_sha, "abc");
    }

    #[test]
    fn malformed_output_is_an_error() {
        let forge = ReplayingForge::new(replayer(&[("forge", "status", json!({"ok": 3}))]));
        let err = forge.status("paritytech", "polkadot", 42).unwrap_err();
        assert!(err.to_string().contains("forge::status"));
    }
}
