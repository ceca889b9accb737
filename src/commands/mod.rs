//! Command dispatch and handlers.

pub mod check;
pub mod companions;
pub mod match_dependent;
pub mod owned;

use crate::adapters::live::graph::LiveGraphSource;
use crate::cli::{Cli, Command};
use crate::config::CheckConfig;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the configuration is invalid or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let mut config = CheckConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.project_dir {
        config.project_dir.clone_from(dir);
    }

    match &cli.command {
        Command::Check(args) => check::run(config, args),
        Command::Owned => owned::run(&LiveGraphSource, &config),
        Command::Match { dependent_dir, name } => {
            match_dependent::run(&LiveGraphSource, &config, dependent_dir, name.as_deref())
        }
        Command::Companions { file } => companions::run(&config, file.as_deref()),
    }
}
