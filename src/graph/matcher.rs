//! Matching a dependent's graph against the units this project owns.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::{DependencyGraph, OwnershipSet};
use crate::error::CheckError;

/// Separators that may follow the canonical source to pin a branch or revision,
/// as in `git+https://host/org/project?branch=master#0123abcd`.
const QUALIFIER_SEPARATORS: [char; 2] = ['?', '#'];

/// Returns `true` if `source` names the canonical origin, bare or qualified.
#[must_use]
pub fn is_canonical_source(source: &str, canonical: &str) -> bool {
    match source.strip_prefix(canonical) {
        Some("") => true,
        Some(rest) => rest.starts_with(QUALIFIER_SEPARATORS),
        None => false,
    }
}

/// Names of units that claim to come from `canonical_source` but are not in
/// `owned`.
///
/// Each name is reported once, in the order it first appears in `graph`.
#[must_use]
pub fn unmatched(
    graph: &DependencyGraph,
    owned: &OwnershipSet,
    canonical_source: &str,
) -> Vec<String> {
    let mut seen = HashSet::new();
    graph
        .units
        .iter()
        .filter(|unit| {
            unit.source.as_deref().is_some_and(|source| is_canonical_source(source, canonical_source))
        })
        .filter(|unit| !owned.contains(&unit.name))
        .filter(|unit| seen.insert(unit.name.as_str()))
        .map(|unit| unit.name.clone())
        .collect()
}

/// Fails when `dependent` references units this project does not own.
///
/// # Errors
///
/// Returns [`CheckError::CrateMatch`] listing every unmatched unit.
pub fn ensure_matched(
    dependent: &str,
    graph: &DependencyGraph,
    owned: &OwnershipSet,
    canonical_source: &str,
) -> Result<(), CheckError> {
    let missing = unmatched(graph, owned, canonical_source);
    if missing.is_empty() {
        debug!(dependent, nodes = graph.len(), "dependent graph matches owned units");
        return Ok(());
    }
    warn!(dependent, unmatched = ?missing, "dependent references unknown units");
    Err(CheckError::CrateMatch { dependent: dependent.to_string(), unmatched: missing })
}
