//! Graphwalk - observable graph search over weighted mazes
//!
//! Loads a grid maze from TOML, builds its directed weighted graph and runs
//! breadth-first search, depth-first search or Dijkstra, printing each step.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphExitCode, GraphError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if wants_json(env::args().skip(1)) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => return report(&GraphError::UsageError(err.to_string()), true, false),
        },
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => report(&e, cli.format == OutputFormat::Json, cli.quiet),
    }
}

/// Print `error` on stderr and turn it into the process exit code
fn report(error: &GraphError, json: bool, quiet: bool) -> ExitCode {
    if json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Whether raw arguments ask for `--format json`, for errors raised before
/// clap has produced a `Cli`
fn wants_json(args: impl Iterator<Item = String>) -> bool {
    let args: Vec<String> = args.collect();
    args.iter().any(|a| a == "--format=json")
        || args.windows(2).any(|w| w[0] == "--format" && w[1] == "json")
}
