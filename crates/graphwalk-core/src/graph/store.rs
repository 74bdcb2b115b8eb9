//! In-memory directed weighted graph
//!
//! Vertices map to their outbound adjacency (neighbor → weight). Both levels
//! are insertion-ordered, so vertex enumeration and neighbor expansion are
//! deterministic for a given build sequence.

use crate::error::{GraphError, Result};
use crate::graph::observer::{GraphObserver, ObserverSet};
use crate::graph::types::Weight;
use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Directed graph with non-negative integer edge weights.
///
/// Vertices are caller-supplied values compared by `Eq`/`Hash`. Edges are
/// directed: adding A→B never creates B→A. There is no removal API; an edge
/// can only be overwritten by adding it again with a new weight.
#[derive(Debug)]
pub struct WeightedGraph<V> {
    adjacency: IndexMap<V, IndexMap<V, Weight>>,
    observers: ObserverSet<V>,
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            observers: ObserverSet::new(),
        }
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(vertices),
            observers: ObserverSet::new(),
        }
    }

    /// Add a vertex with no outbound edges.
    ///
    /// # Errors
    /// `DuplicateVertex` if an equal vertex is already present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::duplicate_vertex(&vertex));
        }
        tracing::trace!(vertex = ?vertex, "add_vertex");
        self.adjacency.insert(vertex, IndexMap::new());
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Set the directed edge `from → to`, overwriting any previous weight.
    ///
    /// # Errors
    /// `UnknownVertex` if either endpoint is absent (checked first), then
    /// `InvalidWeight` if `weight` is negative.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;
        let weight = Weight::try_from(weight).map_err(|_| GraphError::InvalidWeight { weight })?;
        let neighbors = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| GraphError::unknown_vertex(from))?;

        tracing::trace!(from = ?from, to = ?to, weight, "add_edge");
        neighbors.insert(to.clone(), weight);
        Ok(())
    }

    /// Weight of the edge `from → to`, or `None` if there is no such edge.
    ///
    /// # Errors
    /// `UnknownVertex` if either endpoint is absent.
    pub fn weight(&self, from: &V, to: &V) -> Result<Option<Weight>> {
        self.require_vertex(to)?;
        Ok(self.adjacency_of(from)?.get(to).copied())
    }

    /// Register an observer. Registering the same `Arc` twice has no effect.
    pub fn add_observer(&mut self, observer: Arc<dyn GraphObserver<V>>) {
        if !self.observers.insert(observer) {
            tracing::debug!("observer already registered");
        }
    }

    /// Outbound neighbors of `vertex` with their weights, in insertion order.
    ///
    /// # Errors
    /// `UnknownVertex` if `vertex` is absent.
    pub fn neighbors(&self, vertex: &V) -> Result<impl Iterator<Item = (&V, Weight)> + '_> {
        Ok(self
            .adjacency_of(vertex)?
            .iter()
            .map(|(neighbor, weight)| (neighbor, *weight)))
    }

    /// All vertices in enumeration (insertion) order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn observers(&self) -> &ObserverSet<V> {
        &self.observers
    }

    pub(crate) fn adjacency_of(&self, vertex: &V) -> Result<&IndexMap<V, Weight>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::unknown_vertex(vertex))
    }

    /// Position of `vertex` in enumeration order
    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    pub(crate) fn vertex_at(&self, index: usize) -> Option<&V> {
        self.adjacency.get_index(index).map(|(vertex, _)| vertex)
    }

    pub(crate) fn require_vertex(&self, vertex: &V) -> Result<()> {
        if self.adjacency.contains_key(vertex) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(vertex))
        }
    }
}

impl<V> Default for WeightedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
