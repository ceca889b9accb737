//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `companion-check`.
#[derive(Debug, Parser)]
#[command(
    name = "companion-check",
    version,
    about = "Check that a change does not break the projects that depend on it"
)]
pub struct Cli {
    /// Configuration file (defaults to ./companion-check.yaml when present).
    #[arg(long, global = true, value_name = "PATH", env = "COMPANION_CHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Checkout of the project under test.
    #[arg(long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve companions and check every dependent against this change.
    Check(CheckArgs),
    /// List the build units owned by the project.
    Owned,
    /// Match a checked-out dependent against the units owned by the project.
    Match {
        /// Checkout of the dependent (must contain Cargo.lock).
        dependent_dir: PathBuf,
        /// Name used in diagnostics (defaults to the directory name).
        #[arg(long)]
        name: Option<String>,
    },
    /// Parse the companion references of a change description.
    Companions {
        /// Read the description from this file instead of stdin.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

/// Options of the `check` command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Number of the change request being checked.
    #[arg(long = "pr", value_name = "NUMBER")]
    pub change_number: Option<u64>,

    /// Dependent to check; repeat to replace the configured list.
    #[arg(long = "dependent", value_name = "NAME")]
    pub dependents: Vec<String>,

    /// Fail the run when a companion could not be checked.
    #[arg(long)]
    pub strict: bool,
}
