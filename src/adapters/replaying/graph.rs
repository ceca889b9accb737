//! Replaying adapter for the `GraphSource` port.

use std::path::Path;
use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;
use crate::graph::DependencyGraph;
use crate::ports::GraphSource;

/// Replays recorded build graphs from a cassette.
pub struct ReplayingGraphSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGraphSource {
    /// Creates a new replaying graph source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl GraphSource for ReplayingGraphSource {
    fn project_graph(&self, _dir: &Path) -> Result<DependencyGraph, PortError> {
        replay_result(&self.replayer, "graph", "project_graph")
    }

    fn dependent_graph(&self, _dir: &Path) -> Result<DependencyGraph, PortError> {
        replay_result(&self.replayer, "graph", "dependent_graph")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::adapters::replaying::testing::replayer;
    use crate::graph::BuildUnit;

    #[test]
    fn replays_graphs_and_errors() {
        let source = ReplayingGraphSource::new(replayer(&[
            ("graph", "project_graph", json!({"ok": [{"name": "sp-io", "source": null}]})),
            ("graph", "dependent_graph", json!({"err": "failed to read Cargo.lock"})),
        ]));

        let graph = source.project_graph(Path::new(".")).unwrap();
        assert_eq!(graph.units, vec![BuildUnit::local("sp-io")]);

        let err = source.dependent_graph(Path::new("x")).unwrap_err();
        assert_eq!(err.to_string(), "failed to read Cargo.lock");
    }
}
