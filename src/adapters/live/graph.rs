//! Live graph source backed by `cargo metadata` and `Cargo.lock`.

use std::path::Path;
use std::process::Command;

use crate::error::PortError;
use crate::graph::{lockfile, metadata, DependencyGraph};
use crate::ports::GraphSource;

/// Reads graphs from real checkouts.
pub struct LiveGraphSource;

impl GraphSource for LiveGraphSource {
    fn project_graph(&self, dir: &Path) -> Result<DependencyGraph, PortError> {
        let output = Command::new("cargo")
            .args(["metadata", "--format-version", "1"])
            .current_dir(dir)
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("cargo metadata failed: {}", stderr.trim()).into());
        }
        Ok(metadata::parse(&String::from_utf8_lossy(&output.stdout))?)
    }

    fn dependent_graph(&self, dir: &Path) -> Result<DependencyGraph, PortError> {
        let path = dir.join("Cargo.lock");
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        lockfile::parse(&contents)
            .map_err(|e| format!("failed to parse {}: {e}", path.display()).into())
    }
}
