//! `companion-check check` command.

use std::env;
use std::path::PathBuf;

use tracing::error;

use crate::cassette::session::RecordingSession;
use crate::check::{run_check, CheckReport, RunInfo};
use crate::cli::CheckArgs;
use crate::config::CheckConfig;
use crate::context::ServiceContext;

/// Environment variable naming a directory to record port interactions into.
pub const RECORD_ENV: &str = "COMPANION_CHECK_RECORD";

/// Execute the `check` command.
///
/// When `COMPANION_CHECK_RECORD` is set to a directory path, all port
/// interactions are recorded to per-port cassette files in that directory.
///
/// # Errors
///
/// Returns an error string on a fatal condition, or when the finished report
/// does not count as successful.
pub fn run(mut config: CheckConfig, args: &CheckArgs) -> Result<(), String> {
    apply_args(&mut config, args);
    config.validate()?;
    let run = RunInfo::new();

    let (ctx, session) = if let Ok(path) = env::var(RECORD_ENV) {
        let (ctx, session) = ServiceContext::recording_at(PathBuf::from(path), &config, &run.id)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    let result = execute(&ctx, &config, run);

    // Finish recording after the run completes, even on error.
    match session {
        Some(session) => {
            drop(ctx);
            finish_recording(session, result)
        }
        None => result,
    }
}

/// Writes the session's cassettes. A failed run keeps its own error; the
/// recording failure is only logged then.
fn finish_recording(session: RecordingSession, result: Result<(), String>) -> Result<(), String> {
    match session.finish() {
        Ok(output_dir) => eprintln!("Recording saved to: {}", output_dir.display()),
        Err(e) if result.is_err() => error!(error = %e, "recording could not be saved"),
        Err(e) => return Err(e),
    }
    result
}

/// Runs the check on `ctx` and prints the consolidated report.
///
/// # Errors
///
/// Returns the fatal error, or a summary when the report failed.
pub fn execute(ctx: &ServiceContext, config: &CheckConfig, run: RunInfo) -> Result<(), String> {
    let report = run_check(ctx, config, run).map_err(|e| {
        error!(error = %e, "check aborted");
        e.to_string()
    })?;
    print!("{}", report.render());
    verdict(&report, config.strict)
}

fn apply_args(config: &mut CheckConfig, args: &CheckArgs) {
    if args.change_number.is_some() {
        config.change_number = args.change_number;
    }
    if !args.dependents.is_empty() {
        config.dependents.clone_from(&args.dependents);
    }
    config.strict |= args.strict;
}

fn verdict(report: &CheckReport, strict: bool) -> Result<(), String> {
    if report.succeeded(strict) {
        return Ok(());
    }
    let failed = report.failed().count();
    if failed > 0 {
        Err(format!("{failed} dependent(s) failed the check"))
    } else {
        Err(format!("{} companion(s) could not be checked", report.companion_errors.len()))
    }
}
