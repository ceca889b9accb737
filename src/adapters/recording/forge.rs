//! Recording adapter for the `ChangeForge` port.

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::error::PortError;
use crate::ports::{ChangeForge, ChangeStatus};

/// Records forge queries while delegating to an inner implementation.
pub struct RecordingForge {
    inner: Box<dyn ChangeForge>,
    recorder: SharedRecorder,
}

impl RecordingForge {
    /// Creates a new recording forge wrapping the given implementation.
    pub fn new(inner: Box<dyn ChangeForge>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct ChangeInput<'a> {
    org: &'a str,
    repo: &'a str,
    number: u64,
}

impl ChangeForge for RecordingForge {
    fn description(&self, org: &str, repo: &str, number: u64) -> Result<String, PortError> {
        let result = self.inner.description(org, repo, number);
        let input = ChangeInput { org, repo, number };
        record_result(&self.recorder, "forge", "description", &input, &result);
        result
    }

    fn status(&self, org: &str, repo: &str, number: u64) -> Result<ChangeStatus, PortError> {
        let result = self.inner.status(org, repo, number);
        let input = ChangeInput { org, repo, number };
        record_result(&self.recorder, "forge", "status", &input, &result);
        result
    }
}
