//! Terminal front end for searching the synthetic user directory.
//!
//! This binary delegates to `user_directory::cli`, keeping the query loop
//! testable without spawning a process. Logs go to stderr as JSON so stdout
//! carries only query reports.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use user_directory::DirectorySettings;
use user_directory::cli::{CliError, run};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> Result<(), CliError> {
    let settings = DirectorySettings::load_validated(env::args_os())?;
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run(&settings, stdin, &mut stdout)?;
    Ok(())
}
