//! Directed weighted graph and the algorithms that walk it
//!
//! - `store`: vertex and edge storage
//! - `observer`: progress notifications for running algorithms
//! - `algos`: BFS, DFS and Dijkstra
//! - `types`: weights, costs and results

pub mod algos;
pub mod observer;
pub mod store;
pub mod types;

pub use algos::{bfs, dfs, dijkstra, ShortestPaths};
pub use observer::{AlgorithmEvent, GraphObserver, ObserverSet, RecordingObserver};
pub use store::WeightedGraph;
pub use types::{AlgorithmKind, Cost, SearchOutcome, Weight};
