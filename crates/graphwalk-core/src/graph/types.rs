use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weight of a single directed edge.
///
/// Weights are non-negative; the store rejects negative input at
/// [`WeightedGraph::add_edge`](crate::graph::WeightedGraph::add_edge).
pub type Weight = u64;

/// Accumulated path cost computed by Dijkstra.
///
/// `Unreachable` orders after every finite cost, so it can seed the cost
/// table without a magic number. Finite costs are `u128`: a simple path has
/// fewer than 2^64 edges of at most `i64::MAX` each, so sums never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(untagged)]
pub enum Cost {
    Finite(u128),
    #[default]
    Unreachable,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0);

    /// Finite value of this cost, if any
    pub fn value(&self) -> Option<u128> {
        match self {
            Cost::Finite(v) => Some(*v),
            Cost::Unreachable => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }
}

/// Extending a path by one edge
impl std::ops::Add<Weight> for Cost {
    type Output = Self;

    fn add(self, weight: Weight) -> Self {
        match self {
            Cost::Finite(v) => Cost::Finite(v + u128::from(weight)),
            Cost::Unreachable => Cost::Unreachable,
        }
    }
}

impl From<u64> for Cost {
    fn from(cost: u64) -> Self {
        Cost::Finite(u128::from(cost))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{}", v),
            Cost::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Algorithm reported to observers when a run begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    #[default]
    Dijkstra,
}

impl AlgorithmKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "bfs",
            AlgorithmKind::Dfs => "dfs",
            AlgorithmKind::Dijkstra => "dijkstra",
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(AlgorithmKind::Bfs),
            "dfs" => Ok(AlgorithmKind::Dfs),
            "dijkstra" => Ok(AlgorithmKind::Dijkstra),
            other => Err(GraphError::invalid_value(
                "algorithm (expected bfs, dfs or dijkstra)",
                other,
            )),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a BFS or DFS run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<V> {
    pub kind: AlgorithmKind,
    /// Whether the end vertex was dequeued (and `on_search_finished` fired)
    pub reached: bool,
    /// Vertices in the order they were reported visited; never contains the end vertex
    pub visited: Vec<V>,
}
