//! Shortest-path results and path reconstruction

use crate::graph::types::Cost;
use std::collections::HashMap;
use std::hash::Hash;

/// Walk predecessors back from `end` until a vertex without one, returning
/// the sequence in forward order. An unreachable `end` yields `[end]`.
pub fn reconstruct_path<V>(end: &V, predecessors: &HashMap<V, V>) -> Vec<V>
where
    V: Eq + Hash + Clone,
{
    let mut path = vec![end.clone()];
    let mut current = end;
    while let Some(pred) = predecessors.get(current) {
        path.push(pred.clone());
        current = pred;
    }
    path.reverse();
    path
}

/// Outcome of a full Dijkstra run from one start vertex
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    start: V,
    end: V,
    costs: HashMap<V, Cost>,
    predecessors: HashMap<V, V>,
    finish_order: Vec<(V, Cost)>,
    reported_path: Vec<V>,
}

impl<V> ShortestPaths<V>
where
    V: Eq + Hash + Clone,
{
    pub(crate) fn new(
        start: V,
        end: V,
        costs: HashMap<V, Cost>,
        predecessors: HashMap<V, V>,
        finish_order: Vec<(V, Cost)>,
    ) -> Self {
        let reported_path = reconstruct_path(&end, &predecessors);
        Self {
            start,
            end,
            costs,
            predecessors,
            finish_order,
            reported_path,
        }
    }

    pub fn start(&self) -> &V {
        &self.start
    }

    pub fn end(&self) -> &V {
        &self.end
    }

    /// Final cost of `vertex`; `Unreachable` for vertices not reached or not in the graph
    pub fn cost(&self, vertex: &V) -> Cost {
        self.costs.get(vertex).copied().unwrap_or(Cost::Unreachable)
    }

    /// Final cost of the end vertex
    pub fn end_cost(&self) -> Cost {
        self.cost(&self.end)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.cost(vertex).is_finite()
    }

    /// Cheapest start→`vertex` path, or `None` when `vertex` is unreachable
    pub fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        if !self.is_reachable(vertex) {
            return None;
        }
        Some(reconstruct_path(vertex, &self.predecessors))
    }

    /// Vertices with their costs in the order they were finalized
    pub fn finish_order(&self) -> &[(V, Cost)] {
        &self.finish_order
    }

    /// Path handed to `on_dijkstra_finished`; `[end]` when end is unreachable
    pub fn reported_path(&self) -> &[V] {
        &self.reported_path
    }
}
