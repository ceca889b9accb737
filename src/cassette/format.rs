//! Cassette data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (e.g. "forge", "graph", "vcs").
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port, `{"ok": ..}` or `{"err": ".."}`.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Run id of the recorded check.
    pub run_id: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a cassette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_written_yaml() {
        let cassette = Cassette {
            name: "check".into(),
            recorded_at: Utc::now(),
            run_id: "run-1".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "forge".into(),
                method: "status".into(),
                input: json!({"org": "paritytech", "repo": "polkadot", "number": 42}),
                output: json!({"ok": {"mergeable": true, "head_ref": "f", "head_sha": "abc"}}),
            }],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("check.cassette.yaml");
        std::fs::write(&path, serde_yaml::to_string(&cassette).unwrap()).unwrap();

        assert_eq!(Cassette::load(&path).unwrap(), cassette);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Cassette::load(std::path::Path::new("/no/such/cassette.yaml")).unwrap_err();
        assert!(err.contains("/no/such/cassette.yaml"));
    }
}
