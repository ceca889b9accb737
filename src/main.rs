//! Binary entrypoint for the `companion-check` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is fine; variables may come from the CI environment.
    let _ = dotenvy::dotenv();
    companion_check::logging::init();

    match companion_check::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
