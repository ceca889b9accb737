//! Recording adapter for the `GraphSource` port.

use std::path::Path;

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::error::PortError;
use crate::graph::DependencyGraph;
use crate::ports::GraphSource;

/// Records graph queries while delegating to an inner implementation.
pub struct RecordingGraphSource {
    inner: Box<dyn GraphSource>,
    recorder: SharedRecorder,
}

impl RecordingGraphSource {
    /// Creates a new recording graph source wrapping the given implementation.
    pub fn new(inner: Box<dyn GraphSource>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct DirInput<'a> {
    dir: &'a Path,
}

impl GraphSource for RecordingGraphSource {
    fn project_graph(&self, dir: &Path) -> Result<DependencyGraph, PortError> {
        let result = self.inner.project_graph(dir);
        record_result(&self.recorder, "graph", "project_graph", &DirInput { dir }, &result);
        result
    }

    fn dependent_graph(&self, dir: &Path) -> Result<DependencyGraph, PortError> {
        let result = self.inner.dependent_graph(dir);
        record_result(&self.recorder, "graph", "dependent_graph", &DirInput { dir }, &result);
        result
    }
}
