//! Live verifier running configured patch and verify commands.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::PortError;
use crate::ports::{ShellExecutor, Verifier};

/// Runs a patch command then a verify command in the dependent's checkout.
///
/// Commands may use the placeholders `{project_dir}`, `{dependent_dir}`,
/// `{dependent}`, `{canonical_source}` and `{canonical_url}`.
pub struct ShellVerifier {
    shell: Box<dyn ShellExecutor>,
    project_dir: PathBuf,
    canonical_source: String,
    canonical_url: String,
    patch_command: String,
    verify_command: String,
}

impl ShellVerifier {
    /// Creates a verifier running commands through `shell`.
    pub fn new(
        shell: Box<dyn ShellExecutor>,
        project_dir: impl Into<PathBuf>,
        canonical_source: impl Into<String>,
        canonical_url: impl Into<String>,
        patch_command: impl Into<String>,
        verify_command: impl Into<String>,
    ) -> Self {
        Self {
            shell,
            project_dir: project_dir.into(),
            canonical_source: canonical_source.into(),
            canonical_url: canonical_url.into(),
            patch_command: patch_command.into(),
            verify_command: verify_command.into(),
        }
    }

    fn expand(&self, template: &str, dependent: &str, dir: &Path) -> String {
        let project_dir =
            std::fs::canonicalize(&self.project_dir).unwrap_or_else(|_| self.project_dir.clone());
        template
            .replace("{project_dir}", &project_dir.to_string_lossy())
            .replace("{dependent_dir}", &dir.to_string_lossy())
            .replace("{dependent}", dependent)
            .replace("{canonical_source}", &self.canonical_source)
            .replace("{canonical_url}", &self.canonical_url)
    }

    fn step(&self, name: &str, template: &str, dependent: &str, dir: &Path) -> Result<bool, PortError> {
        if template.trim().is_empty() {
            return Ok(true);
        }
        let command = self.expand(template, dependent, dir);
        info!(dependent, step = name, %command, "running");
        let output = self.shell.run_in(dir, &command)?;
        if !output.success() {
            warn!(
                dependent,
                step = name,
                exit_code = output.exit_code,
                stderr = %output.stderr.trim(),
                "step failed"
            );
        }
        Ok(output.success())
    }
}

impl Verifier for ShellVerifier {
    fn patch_and_verify(&self, dependent: &str, dir: &Path) -> Result<bool, PortError> {
        if !self.step("patch", &self.patch_command, dependent, dir)? {
            return Ok(false);
        }
        self.step("verify", &self.verify_command, dependent, dir)
    }
}
