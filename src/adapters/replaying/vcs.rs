//! Replaying adapter for the `Vcs` port.

use std::path::Path;
use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;
use crate::ports::Vcs;

/// Replays recorded version control outcomes from a cassette.
pub struct ReplayingVcs {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingVcs {
    /// Creates a new replaying adapter from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Vcs for ReplayingVcs {
    fn merge_branch(&self, _dir: &Path, _branch: &str) -> Result<(), PortError> {
        replay_result(&self.replayer, "vcs", "merge_branch")
    }

    fn clone_default(&self, _url: &str, _dir: &Path) -> Result<(), PortError> {
        replay_result(&self.replayer, "vcs", "clone_default")
    }

    fn checkout_change(
        &self,
        _dir: &Path,
        _number: u64,
        _head_ref: &str,
        _head_sha: &str,
    ) -> Result<(), PortError> {
        replay_result(&self.replayer, "vcs", "checkout_change")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::adapters::replaying::testing::replayer;

    #[test]
    fn replays_unit_results() {
        let vcs = ReplayingVcs::new(replayer(&[
            ("vcs", "merge_branch", json!({"ok": null})),
            ("vcs", "clone_default", json!({"err": "repository not found"})),
        ]));
        assert!(vcs.merge_branch(Path::new("."), "master").is_ok());
        assert!(vcs.clone_default("https://x", Path::new("y")).is_err());
    }
}
