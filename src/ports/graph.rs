//! Build graph port.

use std::path::Path;

use crate::error::PortError;
use crate::graph::DependencyGraph;

/// Loads build graphs from project checkouts.
///
/// A failed query is always an error, never an empty graph.
pub trait GraphSource: Send + Sync {
    /// Returns the full graph of the project at `dir`, its own packages included.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph cannot be queried.
    fn project_graph(&self, dir: &Path) -> Result<DependencyGraph, PortError>;

    /// Returns the resolved graph of a dependent checked out at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph cannot be read.
    fn dependent_graph(&self, dir: &Path) -> Result<DependencyGraph, PortError>;
}
