//! Checks that a change does not break the projects depending on it.
//!
//! The engine discovers the build units this project owns, resolves
//! `companion:` references from a change description into checkout targets,
//! and matches each dependent's build graph against the owned units before
//! handing the dependent to an external verification step.

pub mod adapters;
pub mod cassette;
pub mod check;
pub mod cli;
pub mod commands;
pub mod companion;
pub mod config;
pub mod context;
pub mod error;
pub mod graph;
pub mod logging;
pub mod ports;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// Help and version requests are printed and count as success.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["companion-check", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_parses_companions_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("description.md");
        std::fs::write(&path, "companion: polkadot#42\n").unwrap();
        let result = run(["companion-check", "companions", "--file", path.to_str().unwrap()]);
        assert!(result.is_ok());
    }
}
