//! Graphwalk Core Library
//!
//! Generic directed weighted graph with observable breadth-first search,
//! depth-first search and Dijkstra, plus a maze-to-graph adapter.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod maze;
