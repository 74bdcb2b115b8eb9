//! `graphwalk inspect` command - report the graph built from a maze

use crate::cli::Cli;
use crate::output_by_format_result;
use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::graph::WeightedGraph;
use graphwalk_core::maze::{GridMaze, Juncture, Maze};

/// Execute the inspect command
pub fn execute(cli: &Cli, maze: &GridMaze, graph: &WeightedGraph<Juncture>) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "width": maze.width(),
                    "height": maze.height(),
                    "vertices": graph.vertex_count(),
                    "edges": graph.edge_count(),
                }))?
            );
            Ok::<(), GraphError>(())
        },
        human => {
            println!("maze: {}x{}", maze.width(), maze.height());
            println!("vertices: {}", graph.vertex_count());
            println!("edges: {}", graph.edge_count());
        }
    )
}
