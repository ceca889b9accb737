//! `companion-check match` command.

use std::path::Path;

use super::owned;
use crate::config::CheckConfig;
use crate::graph::ensure_matched;
use crate::ports::GraphSource;

/// Execute the `match` command against the dependent checked out at `dir`.
///
/// # Errors
///
/// Returns an error string listing every unmatched unit, or if either graph
/// cannot be read.
pub fn run(
    graphs: &dyn GraphSource,
    config: &CheckConfig,
    dir: &Path,
    name: Option<&str>,
) -> Result<(), String> {
    let owned = owned::load(graphs, config)?;
    let fallback = dir.file_name().map(|n| n.to_string_lossy().into_owned());
    let dependent = name.map(str::to_string).or(fallback).unwrap_or_else(|| "dependent".to_string());

    let graph = graphs
        .dependent_graph(dir)
        .map_err(|e| format!("Failed to read build graph of {dependent}: {e}"))?;
    ensure_matched(&dependent, &graph, &owned, &config.canonical_source()).map_err(|e| e.to_string())?;

    println!("{dependent}: all {} referenced unit(s) of {} are known", graph.len(), config.project);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortError;
    use crate::graph::{BuildUnit, DependencyGraph};

    struct Graphs(DependencyGraph);

    impl GraphSource for Graphs {
        fn project_graph(&self, _dir: &Path) -> Result<DependencyGraph, PortError> {
            Ok(DependencyGraph::new(vec![BuildUnit::local("pallet-session")]))
        }

        fn dependent_graph(&self, _dir: &Path) -> Result<DependencyGraph, PortError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn reports_every_unmatched_unit_with_the_dependent_name() {
        let source = "git+https://github.com/paritytech/substrate?branch=master";
        let graphs = Graphs(DependencyGraph::new(vec![
            BuildUnit::sourced("pallet-removed", source),
            BuildUnit::sourced("pallet-renamed", source),
            BuildUnit::sourced("pallet-session", source),
        ]));
        let err =
            run(&graphs, &CheckConfig::default(), Path::new("/work/polkadot"), None).unwrap_err();
        assert!(err.contains("pallet-removed, pallet-renamed"));
        assert!(err.contains("polkadot needs a companion"));
    }

    #[test]
    fn explicit_name_wins_and_clean_graph_passes() {
        let graphs = Graphs(DependencyGraph::new(vec![BuildUnit::sourced(
            "pallet-session",
            "git+https://github.com/paritytech/substrate#abc",
        )]));
        assert!(run(&graphs, &CheckConfig::default(), Path::new("."), Some("cumulus")).is_ok());
    }
}
