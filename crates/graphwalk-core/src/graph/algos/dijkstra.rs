//! Single-source shortest paths over the whole graph

mod path;

use crate::error::{GraphError, Result};
use crate::graph::types::{AlgorithmKind, Cost};
use crate::graph::WeightedGraph;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

pub use path::ShortestPaths;

/// Min-heap entry, ordered by cost and then by the vertex's enumeration
/// index so that equal costs resolve to the first vertex in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct HeapEntry {
    pub(crate) cost: Cost,
    pub(crate) index: usize,
}

/// State tracked during Dijkstra, indexed by vertex enumeration position
struct DijkstraState {
    cost: Vec<Cost>,
    predecessor: Vec<Option<usize>>,
    finalized: Vec<bool>,
    finalized_count: usize,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    /// Lowest index that may still be unfinalized
    scan_from: usize,
}

impl DijkstraState {
    fn new(vertex_count: usize, start: usize) -> Self {
        let mut state = Self {
            cost: vec![Cost::Unreachable; vertex_count],
            predecessor: vec![None; vertex_count],
            finalized: vec![false; vertex_count],
            finalized_count: 0,
            heap: BinaryHeap::new(),
            scan_from: 0,
        };
        state.cost[start] = Cost::ZERO;
        state.heap.push(Reverse(HeapEntry {
            cost: Cost::ZERO,
            index: start,
        }));
        state
    }

    /// Unfinalized vertex with the smallest cost. Once the heap is drained
    /// only unreachable vertices remain and they come out in enumeration order.
    fn next_vertex(&mut self) -> Option<usize> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.finalized[entry.index] {
                return Some(entry.index);
            }
        }
        while self.scan_from < self.finalized.len() {
            if !self.finalized[self.scan_from] {
                return Some(self.scan_from);
            }
            self.scan_from += 1;
        }
        None
    }

    fn finalize(&mut self, index: usize) {
        self.finalized[index] = true;
        self.finalized_count += 1;
    }

    fn relax(&mut self, from: usize, to: usize, weight: u64) {
        if self.finalized[to] {
            return;
        }
        let candidate = self.cost[from] + weight;
        if candidate < self.cost[to] {
            self.cost[to] = candidate;
            self.predecessor[to] = Some(from);
            self.heap.push(Reverse(HeapEntry {
                cost: candidate,
                index: to,
            }));
        }
    }
}

/// Run Dijkstra from `start` over every vertex of the graph.
///
/// The run never stops early: each vertex is finalized exactly once, in
/// nondecreasing cost order, with vertices unreachable from `start` finalized
/// last as [`Cost::Unreachable`]. After the loop the path to `end` is
/// rebuilt from predecessors and reported through `on_dijkstra_finished`.
///
/// If `end` is unreachable the reported path is just `[end]`; use
/// [`ShortestPaths::path_to`] to tell that apart from `start == end`.
///
/// # Errors
/// `UnknownVertex` if `start` or `end` is not in the graph.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra<V>(graph: &WeightedGraph<V>, start: &V, end: &V) -> Result<ShortestPaths<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    let start_index = graph
        .index_of(start)
        .ok_or_else(|| GraphError::unknown_vertex(start))?;
    graph.require_vertex(end)?;

    let started = Instant::now();
    let observers = graph.observers();
    observers.notify(|o| o.on_algorithm_started(AlgorithmKind::Dijkstra));

    let vertex_count = graph.vertex_count();
    let mut state = DijkstraState::new(vertex_count, start_index);
    let mut finish_order: Vec<(V, Cost)> = Vec::with_capacity(vertex_count);

    while state.finalized_count < vertex_count {
        let Some(index) = state.next_vertex() else {
            break;
        };
        state.finalize(index);

        let vertex = vertex_at(graph, index)?;
        let cost = state.cost[index];
        observers.notify(|o| o.on_dijkstra_vertex_finished(vertex, cost));
        finish_order.push((vertex.clone(), cost));

        if !cost.is_finite() {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(vertex)? {
            let neighbor_index = graph
                .index_of(neighbor)
                .ok_or_else(|| GraphError::unknown_vertex(neighbor))?;
            state.relax(index, neighbor_index, weight);
        }
    }

    let mut costs = HashMap::with_capacity(vertex_count);
    let mut predecessors = HashMap::new();
    for (index, cost) in state.cost.iter().enumerate() {
        let vertex = vertex_at(graph, index)?;
        costs.insert(vertex.clone(), *cost);
        if let Some(pred) = state.predecessor[index] {
            predecessors.insert(vertex.clone(), vertex_at(graph, pred)?.clone());
        }
    }

    let result = ShortestPaths::new(start.clone(), end.clone(), costs, predecessors, finish_order);
    observers.notify(|o| o.on_dijkstra_finished(result.reported_path()));

    crate::trace_time!(
        started,
        "dijkstra_complete",
        path_len = result.reported_path().len()
    );
    Ok(result)
}

fn vertex_at<V>(graph: &WeightedGraph<V>, index: usize) -> Result<&V>
where
    V: Eq + Hash + Clone + Debug,
{
    graph
        .vertex_at(index)
        .ok_or_else(|| GraphError::Other(format!("vertex index {} out of range", index)))
}
