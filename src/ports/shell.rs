//! Shell executor port for running external commands.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PortError;

/// The output of a shell command execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// The exit code of the process.
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl ShellOutput {
    /// Returns `true` when the command exited with status 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes shell commands.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command string in the system shell with `dir` as working
    /// directory and returns its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned.
    fn run_in(&self, dir: &Path, command: &str) -> Result<ShellOutput, PortError>;
}
