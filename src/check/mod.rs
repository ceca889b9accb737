//! The check run: merge, discover ownership, resolve companions, check dependents.

pub mod report;

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, info_span, warn};

pub use report::{CheckReport, DependentOutcome, DependentStatus, Revision, RunInfo};

use crate::companion::{extract_references, resolve, Resolution};
use crate::config::CheckConfig;
use crate::context::ServiceContext;
use crate::error::CheckError;
use crate::graph::{discover, ensure_matched, OwnershipSet};

/// Runs one full check.
///
/// Dependents are processed one at a time: companions in description order,
/// then configured dependents not already covered by a companion.
///
/// # Errors
///
/// Returns the first fatal [`CheckError`]. Dependent-scoped failures and soft
/// companion failures are collected in the returned report instead.
pub fn run_check(
    ctx: &ServiceContext,
    config: &CheckConfig,
    run: RunInfo,
) -> Result<CheckReport, CheckError> {
    let span = info_span!("check", run_id = %run.id, project = %config.project);
    let _entered = span.enter();

    info!(branch = %config.target_branch, "merging target branch");
    ctx.vcs
        .merge_branch(&config.project_dir, &config.target_branch)
        .map_err(|e| CheckError::Vcs(format!("merging {}: {e}", config.target_branch)))?;

    let owned = owned_units(ctx, config)?;
    info!(owned = owned.len(), "project ownership discovered");

    let mut report = CheckReport::new(run, owned.len());
    let mut found: HashSet<String> = HashSet::new();

    if let Some(number) = config.change_number {
        check_companions(ctx, config, &owned, number, &mut found, &mut report)?;
    }

    for dependent in &config.dependents {
        if found.contains(dependent) {
            info!(dependent, "covered by a companion, skipping default branch");
            continue;
        }
        let dir = config.dependent_dir(dependent);
        info!(dependent, "checking default branch");
        ctx.vcs
            .clone_default(&config.repository_url(dependent), &dir)
            .map_err(|e| CheckError::Vcs(format!("cloning {dependent}: {e}")))?;
        let status = check_dependent(ctx, config, &owned, dependent, &dir);
        report.outcomes.push(DependentOutcome {
            dependent: dependent.clone(),
            revision: Revision::DefaultBranch,
            status,
        });
    }

    info!(
        checked = report.outcomes.len(),
        failed = report.failed().count(),
        soft_failures = report.companion_errors.len(),
        "check finished"
    );
    Ok(report)
}

/// Discovers the units owned by the project checked out at `project_dir`.
///
/// # Errors
///
/// Returns [`CheckError::MetadataExtraction`] if the graph query fails or
/// yields no owned unit.
pub fn owned_units(ctx: &ServiceContext, config: &CheckConfig) -> Result<OwnershipSet, CheckError> {
    let graph = ctx
        .graphs
        .project_graph(&config.project_dir)
        .map_err(|e| CheckError::MetadataExtraction(e.to_string()))?;
    discover(&graph)
}

fn check_companions(
    ctx: &ServiceContext,
    config: &CheckConfig,
    owned: &OwnershipSet,
    number: u64,
    found: &mut HashSet<String>,
    report: &mut CheckReport,
) -> Result<(), CheckError> {
    let description = ctx
        .forge
        .description(&config.organization, &config.project, number)
        .map_err(|source| CheckError::StatusQueryTransport {
            target: format!("{}#{number}", config.project),
            source,
        })?;

    for raw in extract_references(&description) {
        let resolution = resolve(ctx.forge.as_ref(), &config.organization, raw)?;
        let repository = resolution.reference().repository.clone();
        if !found.insert(repository.clone()) {
            warn!(companion = %resolution.reference(), "repository already has a companion, ignoring");
            continue;
        }

        match resolution {
            Resolution::CheckoutReady { reference, status } => {
                let dir = config.dependent_dir(&repository);
                ctx.vcs
                    .clone_default(&config.repository_url(&repository), &dir)
                    .map_err(|e| CheckError::Vcs(format!("cloning {repository}: {e}")))?;
                ctx.vcs
                    .checkout_change(&dir, reference.number, &status.head_ref, &status.head_sha)
                    .map_err(|e| CheckError::Vcs(format!("checking out {reference}: {e}")))?;
                let status = check_dependent(ctx, config, owned, &repository, &dir);
                report.outcomes.push(DependentOutcome {
                    dependent: repository,
                    revision: Revision::Companion(reference),
                    status,
                });
            }
            Resolution::NotMergeable { error, .. } => {
                report.companion_errors.push(error.to_string());
            }
        }
    }
    Ok(())
}

/// Match, patch and verify one checked-out dependent.
fn check_dependent(
    ctx: &ServiceContext,
    config: &CheckConfig,
    owned: &OwnershipSet,
    dependent: &str,
    dir: &Path,
) -> DependentStatus {
    let graph = match ctx.graphs.dependent_graph(dir) {
        Ok(graph) => graph,
        Err(e) => {
            warn!(dependent, error = %e, "dependent graph unavailable");
            return DependentStatus::Errored(format!("reading build graph: {e}"));
        }
    };

    match ensure_matched(dependent, &graph, owned, &config.canonical_source()) {
        Ok(()) => {}
        Err(CheckError::CrateMatch { unmatched, .. }) => {
            return DependentStatus::Unmatched(unmatched);
        }
        Err(other) => return DependentStatus::Errored(other.to_string()),
    }

    match ctx.verifier.patch_and_verify(dependent, dir) {
        Ok(true) => {
            info!(dependent, "dependent passed");
            DependentStatus::Passed
        }
        Ok(false) => DependentStatus::VerificationFailed,
        Err(e) => {
            let error =
                CheckError::Verification { dependent: dependent.to_string(), reason: e.to_string() };
            warn!(dependent, %error, "verification could not run");
            DependentStatus::Errored(error.to_string())
        }
    }
}
