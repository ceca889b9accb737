//! Recording session managing per-port cassette recorders.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::recorder::CassetteRecorder;

/// Shared handle to one port's recorder.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing `<port>.cassette.yaml` into the
/// session's output directory.
pub struct RecordingSession {
    /// Recorder for graph interactions.
    pub graph: SharedRecorder,
    /// Recorder for forge interactions.
    pub forge: SharedRecorder,
    /// Recorder for version control interactions.
    pub vcs: SharedRecorder,
    /// Recorder for verifier interactions.
    pub verifier: SharedRecorder,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a session writing into `output_dir`, created if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or already holds
    /// cassettes.
    pub fn new(output_dir: impl Into<PathBuf>, run_id: &str) -> Result<Self, String> {
        let output_dir = output_dir.into();
        if output_dir.join("forge.cassette.yaml").exists() {
            return Err(format!("Cassettes already recorded in {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let make_recorder = |port: &str| -> SharedRecorder {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{run_id}-{port}"), run_id)))
        };

        Ok(Self {
            graph: make_recorder("graph"),
            forge: make_recorder("forge"),
            vcs: make_recorder("vcs"),
            verifier: make_recorder("verifier"),
            output_dir,
        })
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a file cannot
    /// be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: SharedRecorder, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.graph, "graph")?;
        finish_one(self.forge, "forge")?;
        finish_one(self.vcs, "vcs")?;
        finish_one(self.verifier, "verifier")?;

        Ok(self.output_dir)
    }
}
