//! `companion-check owned` command.

use crate::config::CheckConfig;
use crate::graph::{discover, OwnershipSet};
use crate::ports::GraphSource;

/// Execute the `owned` command: print every owned unit, one per line.
///
/// # Errors
///
/// Returns an error string if the project graph cannot be read or owns nothing.
pub fn run(graphs: &dyn GraphSource, config: &CheckConfig) -> Result<(), String> {
    let owned = load(graphs, config)?;
    for name in owned.names() {
        println!("{name}");
    }
    Ok(())
}

pub(crate) fn load(graphs: &dyn GraphSource, config: &CheckConfig) -> Result<OwnershipSet, String> {
    let graph = graphs.project_graph(&config.project_dir).map_err(|e| {
        crate::error::CheckError::MetadataExtraction(e.to_string()).to_string()
    })?;
    discover(&graph).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::error::PortError;
    use crate::graph::{BuildUnit, DependencyGraph};

    struct Project(Option<DependencyGraph>);

    impl GraphSource for Project {
        fn project_graph(&self, _dir: &Path) -> Result<DependencyGraph, PortError> {
            self.0.clone().ok_or_else(|| "cargo metadata failed: no Cargo.toml".into())
        }

        fn dependent_graph(&self, _dir: &Path) -> Result<DependencyGraph, PortError> {
            unreachable!("owned never reads dependents")
        }
    }

    #[test]
    fn prints_owned_units() {
        let graphs = Project(Some(DependencyGraph::new(vec![
            BuildUnit::local("sp-io"),
            BuildUnit::sourced("serde", "registry+x"),
        ])));
        assert!(run(&graphs, &CheckConfig::default()).is_ok());
    }

    #[test]
    fn failed_query_is_reported_as_extraction_error() {
        let err = run(&Project(None), &CheckConfig::default()).unwrap_err();
        assert!(err.contains("failed to extract build units"));
        assert!(err.contains("no Cargo.toml"));
    }
}
