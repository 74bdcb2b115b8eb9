//! `graphwalk solve` command - run one algorithm and replay its steps

use std::sync::Arc;

use serde_json::{json, Value};

use crate::cli::Cli;
use crate::output_by_format_result;
use graphwalk_core::config::GraphwalkConfig;
use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::graph::{
    AlgorithmEvent, AlgorithmKind, Cost, RecordingObserver, WeightedGraph,
};
use graphwalk_core::maze::Juncture;

/// Summary of a finished run, independent of the algorithm
enum Outcome {
    Search {
        reached: bool,
        visited: Vec<Juncture>,
    },
    ShortestPath {
        cost: Cost,
        path: Option<Vec<Juncture>>,
    },
}

/// Execute the solve command
pub fn execute(
    cli: &Cli,
    config: &GraphwalkConfig,
    mut graph: WeightedGraph<Juncture>,
    from: Juncture,
    to: Juncture,
    algorithm: AlgorithmKind,
) -> Result<()> {
    let recorder = Arc::new(RecordingObserver::new());
    graph.add_observer(recorder.clone());

    let outcome = match algorithm {
        AlgorithmKind::Bfs | AlgorithmKind::Dfs => {
            let result = if algorithm == AlgorithmKind::Bfs {
                graph.bfs(&from, &to)?
            } else {
                graph.dfs(&from, &to)?
            };
            Outcome::Search {
                reached: result.reached,
                visited: result.visited,
            }
        }
        AlgorithmKind::Dijkstra => {
            let result = graph.dijkstra(&from, &to)?;
            Outcome::ShortestPath {
                cost: result.end_cost(),
                path: result.path_to(&to),
            }
        }
    };

    let events = if config.output.show_events {
        Some(recorder.events())
    } else {
        None
    };

    output_by_format_result!(cli.format,
        json => {
            let output = json_output(algorithm, from, to, events.as_deref(), &outcome)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), GraphError>(())
        },
        human => {
            print_human(cli, algorithm, from, to, events.as_deref(), &outcome);
        }
    )
}

fn json_output(
    algorithm: AlgorithmKind,
    from: Juncture,
    to: Juncture,
    events: Option<&[AlgorithmEvent<Juncture>]>,
    outcome: &Outcome,
) -> Result<Value> {
    let mut output = json!({
        "algorithm": algorithm,
        "from": from,
        "to": to,
    });

    match outcome {
        Outcome::Search { reached, visited } => {
            output["reached"] = json!(reached);
            output["visited"] = serde_json::to_value(visited)?;
        }
        Outcome::ShortestPath { cost, path } => {
            output["reached"] = json!(cost.is_finite());
            output["cost"] = serde_json::to_value(cost)?;
            output["path"] = serde_json::to_value(path)?;
        }
    }

    if let Some(events) = events {
        output["events"] = serde_json::to_value(events)?;
    }
    Ok(output)
}

fn print_human(
    cli: &Cli,
    algorithm: AlgorithmKind,
    from: Juncture,
    to: Juncture,
    events: Option<&[AlgorithmEvent<Juncture>]>,
    outcome: &Outcome,
) {
    if !cli.quiet {
        println!("{} from {} to {}", algorithm, from, to);
        for event in events.unwrap_or_default() {
            println!("  {}", describe_event(event));
        }
    }

    match outcome {
        Outcome::Search { reached, visited } => {
            println!("reached: {}", if *reached { "yes" } else { "no" });
            println!("visited: {}", visited.len());
        }
        Outcome::ShortestPath { cost, path } => {
            println!("cost: {}", cost);
            match path {
                Some(path) => println!("path: {}", join_path(path)),
                None => println!("path: none"),
            }
        }
    }
}

fn describe_event(event: &AlgorithmEvent<Juncture>) -> String {
    match event {
        AlgorithmEvent::Started { algorithm } => format!("start {}", algorithm),
        AlgorithmEvent::Visited { vertex } => format!("visit {}", vertex),
        AlgorithmEvent::SearchFinished => "found".to_string(),
        AlgorithmEvent::VertexFinished { vertex, cost } => {
            format!("settle {} cost {}", vertex, cost)
        }
        AlgorithmEvent::DijkstraFinished { path } => format!("path {}", join_path(path)),
    }
}

fn join_path(path: &[Juncture]) -> String {
    path.iter()
        .map(Juncture::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
