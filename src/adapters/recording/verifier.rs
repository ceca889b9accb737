//! Recording adapter for the `Verifier` port.

use std::path::Path;

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::error::PortError;
use crate::ports::Verifier;

/// Records verification outcomes while delegating to an inner implementation.
pub struct RecordingVerifier {
    inner: Box<dyn Verifier>,
    recorder: SharedRecorder,
}

impl RecordingVerifier {
    /// Creates a new recording verifier wrapping the given implementation.
    pub fn new(inner: Box<dyn Verifier>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct VerifyInput<'a> {
    dependent: &'a str,
    dir: &'a Path,
}

impl Verifier for RecordingVerifier {
    fn patch_and_verify(&self, dependent: &str, dir: &Path) -> Result<bool, PortError> {
        let result = self.inner.patch_and_verify(dependent, dir);
        let input = VerifyInput { dependent, dir };
        record_result(&self.recorder, "verifier", "patch_and_verify", &input, &result);
        result
    }
}
