// hookclean/src/main.rs
//! HookClean entry point.
//!
//! Parses the CLI, initializes logging, runs the sanitizer, and maps the
//! outcome to the exit-code contract:
//!   0 — clean (or sanitized output written)
//!   1 — flagged as suspicious (--flag-only mode)
//!   2 — invalid input / parse error

use clap::Parser;
use log::info;
use std::process::ExitCode;

use hookclean::cli::Cli;
use hookclean::commands::sanitize::{run_sanitize, RunOutcome, SanitizeOptions};
use hookclean::logger;

fn main() -> ExitCode {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    info!("hookclean started. Version: {}", env!("CARGO_PKG_VERSION"));

    let opts = SanitizeOptions {
        source: args.source.into(),
        input: args.input,
        flag_only: args.flag_only,
        verbose: args.verbose,
    };

    match run_sanitize(opts) {
        Ok(RunOutcome::Clean) => ExitCode::SUCCESS,
        Ok(RunOutcome::Flagged) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
