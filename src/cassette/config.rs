//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports without a cassette path panic if
/// called during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the graph port cassette file.
    pub graph: Option<PathBuf>,
    /// Path to the forge port cassette file.
    pub forge: Option<PathBuf>,
    /// Path to the version control port cassette file.
    pub vcs: Option<PathBuf>,
    /// Path to the verifier port cassette file.
    pub verifier: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the graph port.
    pub graph: Option<CassetteReplayer>,
    /// Replayer for the forge port.
    pub forge: Option<CassetteReplayer>,
    /// Replayer for the version control port.
    pub vcs: Option<CassetteReplayer>,
    /// Replayer for the verifier port.
    pub verifier: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Returns a config where all port paths are `None`.
    #[must_use]
    pub fn panic_on_unspecified() -> Self {
        Self::default()
    }

    /// Returns the config for a directory written by a recording session,
    /// using every `<port>.cassette.yaml` file that exists.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let path_for = |port: &str| Some(dir.join(format!("{port}.cassette.yaml"))).filter(|p| p.exists());
        Self {
            graph: path_for("graph"),
            forge: path_for("forge"),
            vcs: path_for("vcs"),
            verifier: path_for("verifier"),
        }
    }

    /// Load a single cassette file and create a replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_port_cassette(path: &Path) -> Result<CassetteReplayer, String> {
        Ok(CassetteReplayer::new(&Cassette::load(path)?))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            graph: self.graph.as_deref().map(Self::load_port_cassette).transpose()?,
            forge: self.forge.as_deref().map(Self::load_port_cassette).transpose()?,
            vcs: self.vcs.as_deref().map(Self::load_port_cassette).transpose()?,
            verifier: self.verifier.as_deref().map(Self::load_port_cassette).transpose()?,
        })
    }
}
