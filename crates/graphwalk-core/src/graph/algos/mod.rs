//! Graph algorithm implementations
//!
//! - `traversal`: breadth-first and depth-first search
//! - `dijkstra`: single-source shortest paths

pub mod dijkstra;
pub mod traversal;

pub use dijkstra::{dijkstra, ShortestPaths};
pub use traversal::{bfs, dfs};

use crate::error::Result;
use crate::graph::types::SearchOutcome;
use crate::graph::WeightedGraph;
use std::fmt::Debug;
use std::hash::Hash;

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// See [`bfs`]
    pub fn bfs(&self, start: &V, end: &V) -> Result<SearchOutcome<V>> {
        bfs(self, start, end)
    }

    /// See [`dfs`]
    pub fn dfs(&self, start: &V, end: &V) -> Result<SearchOutcome<V>> {
        dfs(self, start, end)
    }

    /// See [`dijkstra`]
    pub fn dijkstra(&self, start: &V, end: &V) -> Result<ShortestPaths<V>> {
        dijkstra(self, start, end)
    }
}
