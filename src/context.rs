//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::live::forge::LiveForge;
use crate::adapters::live::graph::LiveGraphSource;
use crate::adapters::live::shell::LiveShellExecutor;
use crate::adapters::live::vcs::LiveVcs;
use crate::adapters::live::verifier::ShellVerifier;
use crate::adapters::recording::{
    RecordingForge, RecordingGraphSource, RecordingVcs, RecordingVerifier,
};
use crate::adapters::replaying::{
    ReplayingForge, ReplayingGraphSource, ReplayingVcs, ReplayingVerifier,
};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::CheckConfig;
use crate::error::PortError;
use crate::graph::DependencyGraph;
use crate::ports::{ChangeForge, ChangeStatus, GraphSource, Vcs, Verifier};

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Build graph queries.
    pub graphs: Box<dyn GraphSource>,
    /// Change descriptions and status.
    pub forge: Box<dyn ChangeForge>,
    /// Merge, clone and checkout.
    pub vcs: Box<dyn Vcs>,
    /// Patch and verify a dependent.
    pub verifier: Box<dyn Verifier>,
}

impl ServiceContext {
    /// Creates a live context from the check configuration.
    ///
    /// # Errors
    ///
    /// Returns an error string if the forge client cannot be built.
    pub fn live(config: &CheckConfig) -> Result<Self, String> {
        let forge = LiveForge::new(
            config.api_url.clone(),
            config.github_token.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )
        .map_err(|e| format!("Failed to create forge client: {e}"))?;

        Ok(Self {
            graphs: Box::new(LiveGraphSource),
            forge: Box::new(forge),
            vcs: Box::new(LiveVcs),
            verifier: Box::new(ShellVerifier::new(
                Box::new(LiveShellExecutor),
                config.project_dir.clone(),
                config.canonical_source(),
                config.canonical_url(),
                config.patch_command.clone(),
                config.verify_command.clone(),
            )),
        })
    }

    /// Creates a live context whose port interactions are recorded into
    /// per-port cassettes under `dir`.
    ///
    /// The returned session must be finished after the context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error string if the live context or the session cannot be
    /// created.
    pub fn recording_at(
        dir: impl Into<PathBuf>,
        config: &CheckConfig,
        run_id: &str,
    ) -> Result<(Self, RecordingSession), String> {
        let live = Self::live(config)?;
        let session = RecordingSession::new(dir, run_id)?;
        let ctx = Self {
            graphs: Box::new(RecordingGraphSource::new(live.graphs, Arc::clone(&session.graph))),
            forge: Box::new(RecordingForge::new(live.forge, Arc::clone(&session.forge))),
            vcs: Box::new(RecordingVcs::new(live.vcs, Arc::clone(&session.vcs))),
            verifier: Box::new(RecordingVerifier::new(
                live.verifier,
                Arc::clone(&session.verifier),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a single cassette holding every port.
    ///
    /// Each port gets its own replayer so per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            graphs: Box::new(ReplayingGraphSource::new(CassetteReplayer::new(&cassette))),
            forge: Box::new(ReplayingForge::new(CassetteReplayer::new(&cassette))),
            vcs: Box::new(ReplayingVcs::new(CassetteReplayer::new(&cassette))),
            verifier: Box::new(ReplayingVerifier::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette panic with a clear message when
    /// called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;
        Ok(Self {
            graphs: match replayers.graph {
                Some(r) => Box::new(ReplayingGraphSource::new(r)),
                None => Box::new(Unconfigured),
            },
            forge: match replayers.forge {
                Some(r) => Box::new(ReplayingForge::new(r)),
                None => Box::new(Unconfigured),
            },
            vcs: match replayers.vcs {
                Some(r) => Box::new(ReplayingVcs::new(r)),
                None => Box::new(Unconfigured),
            },
            verifier: match replayers.verifier {
                Some(r) => Box::new(ReplayingVerifier::new(r)),
                None => Box::new(Unconfigured),
            },
        })
    }
}

/// Stand-in for ports without a cassette during replay.
struct Unconfigured;

fn unconfigured(port: &str) -> ! {
    panic!("{port} port not configured in CassetteConfig: no cassette loaded for {port}");
}

impl GraphSource for Unconfigured {
    fn project_graph(&self, _dir: &Path) -> Result<DependencyGraph, PortError> {
        unconfigured("graph")
    }
    fn dependent_graph(&self, _dir: &Path) -> Result<DependencyGraph, PortError> {
        unconfigured("graph")
    }
}

impl ChangeForge for Unconfigured {
    fn description(&self, _org: &str, _repo: &str, _number: u64) -> Result<String, PortError> {
        unconfigured("forge")
    }
    fn status(&self, _org: &str, _repo: &str, _number: u64) -> Result<ChangeStatus, PortError> {
        unconfigured("forge")
    }
}

impl Vcs for Unconfigured {
    fn merge_branch(&self, _dir: &Path, _branch: &str) -> Result<(), PortError> {
        unconfigured("vcs")
    }
    fn clone_default(&self, _url: &str, _dir: &Path) -> Result<(), PortError> {
        unconfigured("vcs")
    }
    fn checkout_change(
        &self,
        _dir: &Path,
        _number: u64,
        _head_ref: &str,
        _head_sha: &str,
    ) -> Result<(), PortError> {
        unconfigured("vcs")
    }
}

impl Verifier for Unconfigured {
    fn patch_and_verify(&self, _dependent: &str, _dir: &Path) -> Result<bool, PortError> {
        unconfigured("verifier")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Interaction;
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette =
            Cassette { name: "test".into(), recorded_at: Utc::now(), run_id: "r".into(), interactions };
        std::fs::write(path, serde_yaml::to_string(&cassette).unwrap()).unwrap();
    }

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!({}), output }
    }

    #[test]
    fn replaying_context_from_monolithic_cassette() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.cassette.yaml");
        write_cassette(
            &path,
            vec![
                interaction(0, "vcs", "merge_branch", json!({"ok": null})),
                interaction(1, "forge", "description", json!({"ok": "companion: cumulus#7"})),
                interaction(2, "verifier", "patch_and_verify", json!({"ok": true})),
            ],
        );

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert!(ctx.vcs.merge_branch(Path::new("."), "master").is_ok());
        assert_eq!(ctx.forge.description("paritytech", "substrate", 1).unwrap(), "companion: cumulus#7");
        assert!(ctx.verifier.patch_and_verify("cumulus", Path::new("w")).unwrap());
    }

    #[test]
    fn replaying_from_per_port_cassettes() {
        let dir = tempfile::tempdir().unwrap();
        let vcs_path = dir.path().join("vcs.cassette.yaml");
        write_cassette(&vcs_path, vec![interaction(0, "vcs", "clone_default", json!({"ok": null}))]);

        let config = CassetteConfig { vcs: Some(vcs_path), ..CassetteConfig::default() };
        let ctx = ServiceContext::replaying_from(&config).unwrap();
        assert!(ctx.vcs.clone_default("https://x", Path::new("y")).is_ok());
    }

    #[test]
    #[should_panic(expected = "not configured in CassetteConfig")]
    fn unspecified_port_panics_with_clear_message() {
        let config = CassetteConfig::panic_on_unspecified();
        let ctx = ServiceContext::replaying_from(&config).unwrap();
        let _ = ctx.forge.status("paritytech", "polkadot", 1);
    }

    #[test]
    fn recording_context_writes_cassettes_after_finish() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("rec");
        let (ctx, session) =
            ServiceContext::recording_at(&out, &CheckConfig::default(), "run-1").unwrap();
        assert!(ctx.graphs.dependent_graph(dir.path()).is_err());
        drop(ctx);

        let written = session.finish().unwrap();
        let cassette = Cassette::load(&written.join("graph.cassette.yaml")).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        assert!(cassette.interactions[0].output.get("err").is_some());
    }
}
