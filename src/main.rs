//! sfdpdec - SFDP header decoder
//!
//! Reads a raw Serial Flash Discoverable Parameters dump (JESD216) and
//! prints its header and parameter headers, one field per line.
//!
//! Every failure (bad arguments, unreadable file, short or invalid SFDP
//! data) is reported on stderr and exits with status 1.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::Cli;
use error::CliError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            return match e.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => report(CliError::Write(err)),
            };
        }
        Err(e) => return report(CliError::Usage(e)),
    };

    // Initialize logger; -v overrides RUST_LOG
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = log_level(cli.verbose) {
        logger.filter_level(level);
    }
    logger.init();

    match commands::run_dump(&cli.input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

/// Log level requested with -v, or None to keep the default filter
fn log_level(verbose: u8) -> Option<log::LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    }
}

fn report(err: CliError) -> ExitCode {
    let msg = err.to_string();
    eprintln!("{}", msg.trim_end());
    ExitCode::FAILURE
}
