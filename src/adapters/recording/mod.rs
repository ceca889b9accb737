//! Recording adapters that capture interactions to cassettes.

pub mod forge;
pub mod graph;
pub mod vcs;
pub mod verifier;

pub use forge::RecordingForge;
pub use graph::RecordingGraphSource;
pub use vcs::RecordingVcs;
pub use verifier::RecordingVerifier;

use serde::Serialize;

use crate::cassette::session::SharedRecorder;

/// Record a `Result<T, E>` interaction.
///
/// Mirror of `replaying::replay_result`:
/// - `Ok(v)` is serialized as `{"ok": v}`
/// - `Err(e)` is serialized as `{"err": e.to_string()}`
///
/// A value that cannot be serialized is recorded as an error entry so the
/// recorded run itself is never disturbed.
pub(crate) fn record_result<T, E, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or_else(
        |e| serde_json::json!({ "unserializable": e.to_string() }),
    );

    let output_json = match result {
        Ok(v) => match serde_json::to_value(v) {
            Ok(inner) => serde_json::json!({ "ok": inner }),
            Err(e) => serde_json::json!({ "err": format!("unserializable output: {e}") }),
        },
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };

    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input_json, output_json),
        Err(poisoned) => poisoned.into_inner().record(port, method, input_json, output_json),
    }
}
