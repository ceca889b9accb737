//! Replaying adapters that serve recorded interactions.

pub mod forge;
pub mod graph;
pub mod vcs;
pub mod verifier;

pub use forge::ReplayingForge;
pub use graph::ReplayingGraphSource;
pub use vcs::ReplayingVcs;
pub use verifier::ReplayingVerifier;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;

/// Serve the next `port::method` interaction as a `Result`.
///
/// Mirror of `recording::record_result`: `{"err": msg}` becomes `Err(msg)`,
/// `{"ok": v}` is deserialized into `T`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Result<T, PortError> {
    let output = {
        let mut replayer = replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction(port, method).output.clone()
    };
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").cloned().unwrap_or(output);
    serde_json::from_value(value)
        .map_err(|e| format!("{port}::{method}: failed to deserialize cassette output: {e}").into())
}
