//! Build graphs, ownership discovery and dependent matching.

pub mod lockfile;
pub mod matcher;
pub mod metadata;
pub mod ownership;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use matcher::{ensure_matched, unmatched};
pub use ownership::discover;

/// One named package in a build graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildUnit {
    /// Package name.
    pub name: String,
    /// Where the package comes from. `None` for packages defined locally.
    pub source: Option<String>,
}

impl BuildUnit {
    /// A unit defined by the project itself.
    pub fn local(name: impl Into<String>) -> Self {
        Self { name: name.into(), source: None }
    }

    /// A unit fetched from `source`.
    pub fn sourced(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(), source: Some(source.into()) }
    }

    /// Returns `true` when the unit has no remote origin.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.source.is_none()
    }
}

/// Ordered list of units, one per node of a build manifest.
///
/// A name may appear more than once when several versions are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    /// Units in manifest order.
    pub units: Vec<BuildUnit>,
}

impl DependencyGraph {
    /// Wraps a list of units.
    #[must_use]
    pub fn new(units: Vec<BuildUnit>) -> Self {
        Self { units }
    }

    /// Number of nodes, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl FromIterator<BuildUnit> for DependencyGraph {
    fn from_iter<T: IntoIterator<Item = BuildUnit>>(iter: T) -> Self {
        Self { units: iter.into_iter().collect() }
    }
}

/// Names of the units this project defines, deduplicated, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipSet {
    names: Vec<String>,
    lookup: HashSet<String>,
}

impl OwnershipSet {
    /// Adds a name, ignoring duplicates. Returns `true` if it was new.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.lookup.contains(name) {
            return false;
        }
        self.lookup.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    /// Returns `true` if the project owns a unit called `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    /// Owned names in first-seen order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of owned units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when nothing is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for OwnershipSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = Self::default();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_set_collapses_duplicates_in_order() {
        let set: OwnershipSet = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(set.names(), ["b", "a", "c"]);
        assert!(set.contains("c"));
        assert!(!set.contains("d"));
    }

    #[test]
    fn graph_serializes_as_plain_list() {
        let graph = DependencyGraph::new(vec![BuildUnit::local("a"), BuildUnit::sourced("b", "s")]);
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"name": "a", "source": null}, {"name": "b", "source": "s"}])
        );
    }
}
