//! Live version control adapter using `git` CLI commands.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::PortError;
use crate::ports::Vcs;

/// Live adapter that shells out to the `git` CLI.
pub struct LiveVcs;

/// Runs `git <args>` in `dir`, failing on a non-zero exit.
fn git(dir: &Path, args: &[&str]) -> Result<(), PortError> {
    debug!(dir = %dir.display(), ?args, "running git");
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git {} failed: {}", args.join(" "), stderr.trim()).into());
    }
    Ok(())
}

impl Vcs for LiveVcs {
    fn merge_branch(&self, dir: &Path, branch: &str) -> Result<(), PortError> {
        git(dir, &["fetch", "origin", branch])?;
        git(dir, &["merge", "--no-edit", "--no-ff", &format!("origin/{branch}")])
    }

    fn clone_default(&self, url: &str, dir: &Path) -> Result<(), PortError> {
        if dir.exists() {
            std::fs::remove_dir_all(dir)?;
        }
        if let Some(parent) = dir.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let target = dir.to_string_lossy();
        git(Path::new("."), &["clone", url, &target])
    }

    fn checkout_change(
        &self,
        dir: &Path,
        number: u64,
        head_ref: &str,
        head_sha: &str,
    ) -> Result<(), PortError> {
        // The head branch may share its name with the checked-out default
        // branch, so the change is only reachable through FETCH_HEAD.
        debug!(number, head_ref, head_sha, "checking out change");
        git(dir, &["fetch", "origin", &format!("pull/{number}/head")])?;
        git(dir, &["checkout", "--detach", head_sha])
    }
}
