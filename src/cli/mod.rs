//! CLI argument parsing for graphwalk
//!
//! Supports global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graphwalk_core::graph::AlgorithmKind;
use graphwalk_core::maze::Juncture;
pub use output::OutputFormat;
use parse::{parse_algorithm, parse_juncture};

/// Graphwalk - observable graph search over weighted mazes
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./graphwalk.toml when present)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a maze and report the size of its graph
    Inspect {
        /// Maze description (TOML)
        maze: PathBuf,
    },

    /// Run a search between two junctures and print every step
    Solve {
        /// Maze description (TOML)
        maze: PathBuf,

        /// Start juncture as x,y
        #[arg(long, value_parser = parse_juncture)]
        from: Juncture,

        /// End juncture as x,y
        #[arg(long, value_parser = parse_juncture)]
        to: Juncture,

        /// Algorithm to run (defaults to the configured algorithm)
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<AlgorithmKind>,
    },
}
