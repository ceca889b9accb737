//! Discovery of the build units owned by the project under test.

use tracing::debug;

use super::{DependencyGraph, OwnershipSet};
use crate::error::CheckError;

/// Collects every unit of `graph` that has no remote source.
///
/// Names are deduplicated, keeping the order they were first seen in.
///
/// # Errors
///
/// Returns [`CheckError::MetadataExtraction`] when no owned unit is found. A
/// project always owns at least its own package, so an empty result means the
/// graph query itself went wrong.
pub fn discover(graph: &DependencyGraph) -> Result<OwnershipSet, CheckError> {
    let owned: OwnershipSet =
        graph.units.iter().filter(|unit| unit.is_local()).map(|unit| unit.name.as_str()).collect();

    if owned.is_empty() {
        return Err(CheckError::MetadataExtraction(format!(
            "no locally defined unit among {} graph node(s)",
            graph.len()
        )));
    }

    debug!(owned = owned.len(), nodes = graph.len(), "discovered owned build units");
    Ok(owned)
}
