//! Reading `cargo metadata` output into a [`DependencyGraph`].

use serde::Deserialize;

use super::{BuildUnit, DependencyGraph};
use crate::error::CheckError;

/// Top-level `cargo metadata --format-version 1` document. Only the fields
/// needed for ownership are kept.
#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    source: Option<String>,
}

/// Parses `cargo metadata` JSON.
///
/// An empty package list is a valid result here; deciding whether that is
/// acceptable is left to [`discover`](super::discover).
///
/// # Errors
///
/// Returns [`CheckError::MetadataExtraction`] if the document is not valid
/// metadata JSON.
pub fn parse(json: &str) -> Result<DependencyGraph, CheckError> {
    let metadata: Metadata = serde_json::from_str(json)
        .map_err(|e| CheckError::MetadataExtraction(format!("unreadable cargo metadata: {e}")))?;
    Ok(metadata
        .packages
        .into_iter()
        .map(|package| BuildUnit { name: package.name, source: package.source })
        .collect())
}
