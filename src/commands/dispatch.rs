//! Command dispatch logic for graphwalk
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use graphwalk_core::config::GraphwalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::graph::WeightedGraph;
use graphwalk_core::maze::{build_maze_graph, GridMaze, Juncture};

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = GraphwalkConfig::discover(cli.config.as_deref(), &cwd)?;

    if cli.verbose {
        eprintln!("load_config: {:?}", start.elapsed());
    }

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Inspect { maze }) => {
            let (maze, graph) = load_maze(cli, &config, maze, start)?;
            commands::inspect::execute(cli, &maze, &graph)
        }

        Some(Commands::Solve {
            maze,
            from,
            to,
            algorithm,
        }) => {
            let (_, graph) = load_maze(cli, &config, maze, start)?;
            let algorithm = algorithm.unwrap_or(config.default_algorithm);
            commands::solve::execute(cli, &config, graph, *from, *to, algorithm)?;
            if cli.verbose {
                eprintln!("solve: {:?}", start.elapsed());
            }
            Ok(())
        }
    }
}

fn handle_no_command() -> Result<()> {
    println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Observable graph search over weighted mazes.");
    println!();
    println!("Run `graphwalk --help` for usage information.");
    Ok(())
}

fn load_maze(
    cli: &Cli,
    config: &GraphwalkConfig,
    path: &Path,
    start: Instant,
) -> Result<(GridMaze, WeightedGraph<Juncture>)> {
    let maze = GridMaze::load(path, config.maze.default_weight)?;
    let graph = build_maze_graph(&maze)?;

    if cli.verbose {
        eprintln!("build_graph: {:?}", start.elapsed());
    }
    tracing::debug!(path = %path.display(), vertices = graph.vertex_count(), "maze_loaded");
    Ok((maze, graph))
}
