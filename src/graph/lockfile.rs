//! Reading a dependent's `Cargo.lock` into a [`DependencyGraph`].

use serde::Deserialize;

use super::{BuildUnit, DependencyGraph};

#[derive(Deserialize)]
struct Lockfile {
    #[serde(default, rename = "package")]
    packages: Vec<LockedPackage>,
}

#[derive(Deserialize)]
struct LockedPackage {
    name: String,
    source: Option<String>,
}

/// Parses the `[[package]]` tables of a lockfile, in file order.
///
/// # Errors
///
/// Returns the TOML error if the lockfile cannot be parsed.
pub fn parse(contents: &str) -> Result<DependencyGraph, toml::de::Error> {
    let lockfile: Lockfile = toml::from_str(contents)?;
    Ok(lockfile
        .packages
        .into_iter()
        .map(|package| BuildUnit { name: package.name, source: package.source })
        .collect())
}
