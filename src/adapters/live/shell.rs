//! Live shell executor using `std::process::Command`.

use std::path::Path;
use std::process::Command;

use crate::error::PortError;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Live shell executor that runs commands via the system shell.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run_in(&self, dir: &Path, command: &str) -> Result<ShellOutput, PortError> {
        let output = Command::new("sh").arg("-c").arg(command).current_dir(dir).output()?;
        Ok(ShellOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_echo_command() {
        let shell = LiveShellExecutor;
        let result = shell.run_in(Path::new("."), "echo hello").unwrap();

        assert!(result.success());
        assert_eq!(result.stdout.trim(), "hello");
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn runs_in_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let result = LiveShellExecutor.run_in(dir.path(), "ls").unwrap();
        assert!(result.stdout.contains("marker"));
    }

    #[test]
    fn captures_exit_code() {
        let result = LiveShellExecutor.run_in(Path::new("."), "exit 42").unwrap();
        assert_eq!(result.exit_code, 42);
        assert!(!result.success());
    }
}
