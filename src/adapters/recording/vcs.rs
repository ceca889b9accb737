//! Recording adapter for the `Vcs` port.

use std::path::Path;

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::error::PortError;
use crate::ports::Vcs;

/// Records version control operations while delegating to an inner implementation.
pub struct RecordingVcs {
    inner: Box<dyn Vcs>,
    recorder: SharedRecorder,
}

impl RecordingVcs {
    /// Creates a new recording adapter wrapping the given implementation.
    pub fn new(inner: Box<dyn Vcs>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct MergeInput<'a> {
    dir: &'a Path,
    branch: &'a str,
}

#[derive(Serialize)]
struct CloneInput<'a> {
    url: &'a str,
    dir: &'a Path,
}

#[derive(Serialize)]
struct CheckoutInput<'a> {
    dir: &'a Path,
    number: u64,
    head_ref: &'a str,
    head_sha: &'a str,
}

impl Vcs for RecordingVcs {
    fn merge_branch(&self, dir: &Path, branch: &str) -> Result<(), PortError> {
        let result = self.inner.merge_branch(dir, branch);
        record_result(&self.recorder, "vcs", "merge_branch", &MergeInput { dir, branch }, &result);
        result
    }

    fn clone_default(&self, url: &str, dir: &Path) -> Result<(), PortError> {
        let result = self.inner.clone_default(url, dir);
        record_result(&self.recorder, "vcs", "clone_default", &CloneInput { url, dir }, &result);
        result
    }

    fn checkout_change(
        &self,
        dir: &Path,
        number: u64,
        head_ref: &str,
        head_sha: &str,
    ) -> Result<(), PortError> {
        let result = self.inner.checkout_change(dir, number, head_ref, head_sha);
        let input = CheckoutInput { dir, number, head_ref, head_sha };
        record_result(&self.recorder, "vcs", "checkout_change", &input, &result);
        result
    }
}
