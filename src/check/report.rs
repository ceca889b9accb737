//! Outcome of a check run and its human-readable rendering.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::companion::CompanionReference;
use crate::error::CheckError;

/// Identity of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInfo {
    /// Unique id attached to logs and cassettes.
    pub id: String,
    /// When the run started.
    pub started_at: DateTime<Utc>,
}

impl RunInfo {
    /// A fresh run id stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self { id: Uuid::new_v4().to_string(), started_at: Utc::now() }
    }
}

impl Default for RunInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Which revision of a dependent was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// The head of a companion change.
    Companion(CompanionReference),
    /// The dependent's default branch.
    DefaultBranch,
}

/// Result of one dependent's cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependentStatus {
    /// Graph matched and verification passed.
    Passed,
    /// The dependent references units this project does not own.
    Unmatched(Vec<String>),
    /// The patched dependent failed verification.
    VerificationFailed,
    /// The cycle could not complete.
    Errored(String),
}

impl DependentStatus {
    /// Returns `true` for [`DependentStatus::Passed`].
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// One dependent and how its cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentOutcome {
    /// Dependent repository name.
    pub dependent: String,
    /// Revision that was checked.
    pub revision: Revision,
    /// How the cycle ended.
    pub status: DependentStatus,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Identity of the run.
    pub run: RunInfo,
    /// Number of units owned by the project.
    pub owned_units: usize,
    /// Soft failures, in the order they were recorded.
    pub companion_errors: Vec<String>,
    /// Checked dependents, in processing order.
    pub outcomes: Vec<DependentOutcome>,
}

impl CheckReport {
    /// Creates an empty report for `run`.
    #[must_use]
    pub fn new(run: RunInfo, owned_units: usize) -> Self {
        Self { run, owned_units, companion_errors: Vec::new(), outcomes: Vec::new() }
    }

    /// Dependents whose cycle did not pass.
    pub fn failed(&self) -> impl Iterator<Item = &DependentOutcome> {
        self.outcomes.iter().filter(|o| !o.status.passed())
    }

    /// Whether the run counts as successful.
    ///
    /// Failed dependents always fail the run. Soft failures only do when
    /// `strict` is set.
    #[must_use]
    pub fn succeeded(&self, strict: bool) -> bool {
        self.failed().next().is_none() && (!strict || self.companion_errors.is_empty())
    }

    /// Renders the consolidated report.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Run {} started {} ({} owned unit(s))",
            self.run.id,
            self.run.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.owned_units
        );

        if self.outcomes.is_empty() {
            out.push_str("No dependents were checked.\n");
        }
        for outcome in &self.outcomes {
            let revision = match &outcome.revision {
                Revision::Companion(reference) => format!("companion {reference}"),
                Revision::DefaultBranch => "default branch".to_string(),
            };
            let status = match &outcome.status {
                DependentStatus::Passed => "passed".to_string(),
                DependentStatus::Unmatched(names) => CheckError::CrateMatch {
                    dependent: outcome.dependent.clone(),
                    unmatched: names.clone(),
                }
                .to_string(),
                DependentStatus::VerificationFailed => "verification failed".to_string(),
                DependentStatus::Errored(reason) => format!("error: {reason}"),
            };
            let _ = writeln!(out, "  {:<24} {:<28} {status}", outcome.dependent, revision);
        }

        if !self.companion_errors.is_empty() {
            let _ = writeln!(out, "\nCompanion errors ({}):", self.companion_errors.len());
            for error in &self.companion_errors {
                let _ = writeln!(out, "  - {error}");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CheckReport {
        let mut report = CheckReport::new(RunInfo::new(), 3);
        report.outcomes.push(DependentOutcome {
            dependent: "cumulus".into(),
            revision: Revision::DefaultBranch,
            status: DependentStatus::Passed,
        });
        report
    }

    #[test]
    fn soft_failures_only_fail_strict_runs() {
        let mut report = report();
        assert!(report.succeeded(true));
        report.companion_errors.push("companion polkadot#42 is not mergeable".into());
        assert!(report.succeeded(false));
        assert!(!report.succeeded(true));
    }

    #[test]
    fn failed_dependents_always_fail() {
        let mut report = report();
        report.outcomes.push(DependentOutcome {
            dependent: "polkadot".into(),
            revision: Revision::Companion(CompanionReference {
                repository: "polkadot".into(),
                number: 42,
            }),
            status: DependentStatus::Unmatched(vec!["pallet-removed".into()]),
        });
        assert!(!report.succeeded(false));
        assert_eq!(report.failed().count(), 1);

        let rendered = report.render();
        assert!(rendered.contains("companion polkadot#42"));
        assert!(rendered.contains("not part of this project: pallet-removed"));
        assert!(rendered.contains("polkadot needs a companion change"));
    }

    #[test]
    fn renders_companion_errors_once_at_the_end() {
        let mut report = report();
        report.companion_errors.push("companion polkadot#42 is not mergeable".into());
        let rendered = report.render();
        assert_eq!(rendered.matches("polkadot#42").count(), 1);
        assert!(rendered.trim_end().ends_with("companion polkadot#42 is not mergeable"));
    }
}
