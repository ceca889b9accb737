//! `companion-check companions` command.

use std::io::Read;
use std::path::Path;

use crate::companion::{extract_references, parse_reference, CompanionReference};
use crate::config::CheckConfig;

/// Execute the `companions` command: parse a description read from `file` or
/// stdin and print each reference as `<repo>#<number>`.
///
/// # Errors
///
/// Returns an error string if the input cannot be read or a reference is
/// malformed.
pub fn run(config: &CheckConfig, file: Option<&Path>) -> Result<(), String> {
    let description = match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {e}"))?;
            buf
        }
    };

    let references = parse_all(&description, &config.organization)?;
    if references.is_empty() {
        println!("No companion references found.");
    }
    for reference in &references {
        println!("{reference}");
    }
    Ok(())
}

/// Parses every companion of `description`, stopping at the first malformed one.
fn parse_all(description: &str, org: &str) -> Result<Vec<CompanionReference>, String> {
    extract_references(description)
        .map(|raw| parse_reference(raw, org).map_err(|e| e.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_references_in_order() {
        let refs = parse_all(
            "companion: polkadot#42\nCOMPANION: https://github.com/paritytech/cumulus/pull/7",
            "paritytech",
        )
        .unwrap();
        let rendered: Vec<String> = refs.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["polkadot#42", "cumulus#7"]);
    }

    #[test]
    fn first_malformed_reference_is_an_error() {
        let err = parse_all("companion: polkadot#42\ncompanion: polkadot", "paritytech").unwrap_err();
        assert!(err.contains("invalid companion reference \"polkadot\""));
    }

    #[test]
    fn reads_description_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.md");
        std::fs::write(&path, "companion: polkadot#42\n").unwrap();
        assert!(run(&CheckConfig::default(), Some(&path)).is_ok());
        assert!(run(&CheckConfig::default(), Some(&dir.path().join("missing.md"))).is_err());
    }
}
