//! Command line tool for evaluating permission clauses and catalogs.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use permission_check::cli::{Cli, Outcome, run};
use permission_check::config::CheckConfig;
use permission_check::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CheckConfig::from_env() {
        Ok(config) => cli.configure(config),
        Err(e) => {
            init_logging(&cli.configure(CheckConfig::default()));
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = run(&cli.command, &config, &mut out);
    if let Err(e) = out.flush() {
        tracing::error!(error = %e, "failed to flush output");
        return ExitCode::from(2);
    }

    match outcome {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Denied) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("check failed: {e:#}");
            ExitCode::from(2)
        }
    }
}
