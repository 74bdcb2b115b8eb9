//! Breadth-first and depth-first search
//!
//! Both searches share one visited/frontier loop and differ only in how the
//! frontier hands back vertices: FIFO for BFS, LIFO for DFS.

use crate::error::Result;
use crate::graph::types::{AlgorithmKind, SearchOutcome};
use crate::graph::WeightedGraph;
use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

/// Discovered-but-not-yet-visited vertices
trait Frontier<V> {
    fn push(&mut self, vertex: V);
    fn pop(&mut self) -> Option<V>;
}

impl<V> Frontier<V> for VecDeque<V> {
    fn push(&mut self, vertex: V) {
        self.push_back(vertex);
    }

    fn pop(&mut self) -> Option<V> {
        self.pop_front()
    }
}

impl<V> Frontier<V> for Vec<V> {
    fn push(&mut self, vertex: V) {
        Vec::push(self, vertex);
    }

    fn pop(&mut self) -> Option<V> {
        Vec::pop(self)
    }
}

/// State tracked during a search
struct SearchState<V, F> {
    visited: HashSet<V>,
    frontier: F,
    order: Vec<V>,
}

impl<V, F> SearchState<V, F>
where
    V: Eq + Hash + Clone,
    F: Frontier<V>,
{
    fn new(start: V, mut frontier: F) -> Self {
        frontier.push(start);
        Self {
            visited: HashSet::new(),
            frontier,
            order: Vec::new(),
        }
    }
}

fn search<V, F>(
    graph: &WeightedGraph<V>,
    start: &V,
    end: &V,
    kind: AlgorithmKind,
    frontier: F,
) -> Result<SearchOutcome<V>>
where
    V: Eq + Hash + Clone + Debug,
    F: Frontier<V>,
{
    graph.require_vertex(start)?;
    graph.require_vertex(end)?;

    let started = Instant::now();
    let observers = graph.observers();
    observers.notify(|o| o.on_algorithm_started(kind));

    let mut state = SearchState::new(start.clone(), frontier);

    while let Some(current) = state.frontier.pop() {
        if state.visited.contains(&current) {
            continue;
        }

        // The end vertex terminates the search before it is marked visited
        if &current == end {
            observers.notify(|o| o.on_search_finished());
            crate::trace_time!(started, "search_reached_end", visited = state.order.len());
            return Ok(SearchOutcome {
                kind,
                reached: true,
                visited: state.order,
            });
        }

        observers.notify(|o| o.on_vertex_visited(&current));
        state.visited.insert(current.clone());

        for (neighbor, _) in graph.neighbors(&current)? {
            if !state.visited.contains(neighbor) {
                state.frontier.push(neighbor.clone());
            }
        }

        state.order.push(current);
    }

    crate::trace_time!(started, "search_exhausted", visited = state.order.len());
    Ok(SearchOutcome {
        kind,
        reached: false,
        visited: state.order,
    })
}

/// Breadth-first search from `start`, stopping when `end` is dequeued.
///
/// `end` itself is never reported as visited; `bfs(a, a)` fires only the
/// started and search-finished notifications.
///
/// # Errors
/// `UnknownVertex` if `start` or `end` is not in the graph. No notification
/// is sent in that case.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs<V>(graph: &WeightedGraph<V>, start: &V, end: &V) -> Result<SearchOutcome<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    search(graph, start, end, AlgorithmKind::Bfs, VecDeque::new())
}

/// Depth-first search from `start`, stopping when `end` is popped.
///
/// Same contract as [`bfs`] with a stack for a frontier.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dfs<V>(graph: &WeightedGraph<V>, start: &V, end: &V) -> Result<SearchOutcome<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    search(graph, start, end, AlgorithmKind::Dfs, Vec::new())
}
