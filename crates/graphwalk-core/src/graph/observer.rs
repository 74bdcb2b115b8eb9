//! Observer protocol for algorithm progress
//!
//! Observers are registered on a [`WeightedGraph`](crate::graph::WeightedGraph)
//! and receive synchronous callbacks while an algorithm runs. Every callback
//! has a no-op default so an observer only implements what it renders.

use crate::graph::types::{AlgorithmKind, Cost};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Callbacks fired by BFS, DFS and Dijkstra.
///
/// Order within one run:
/// 1. `on_algorithm_started` once, before any vertex work
/// 2. `on_vertex_visited` per visited vertex (BFS/DFS)
/// 3. `on_search_finished` once when the end vertex is reached (BFS/DFS)
/// 4. `on_dijkstra_vertex_finished` per finalized vertex, nondecreasing cost
/// 5. `on_dijkstra_finished` once with the start→end path
///
/// Delivery order across different observers is not part of the contract.
pub trait GraphObserver<V> {
    fn on_algorithm_started(&self, _kind: AlgorithmKind) {}

    fn on_vertex_visited(&self, _vertex: &V) {}

    fn on_search_finished(&self) {}

    fn on_dijkstra_vertex_finished(&self, _vertex: &V, _cost: Cost) {}

    fn on_dijkstra_finished(&self, _path: &[V]) {}
}

/// Registered observers, deduplicated by allocation identity
pub struct ObserverSet<V> {
    observers: Vec<Arc<dyn GraphObserver<V>>>,
}

impl<V> ObserverSet<V> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer. Returns false if this exact observer was already present.
    pub fn insert(&mut self, observer: Arc<dyn GraphObserver<V>>) -> bool {
        let ptr = Arc::as_ptr(&observer) as *const ();
        if self
            .observers
            .iter()
            .any(|existing| Arc::as_ptr(existing) as *const () == ptr)
        {
            return false;
        }
        self.observers.push(observer);
        true
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver one notification to every registered observer
    pub(crate) fn notify(&self, f: impl Fn(&dyn GraphObserver<V>)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }
}

impl<V> Default for ObserverSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for ObserverSet<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("len", &self.observers.len())
            .finish()
    }
}

/// One observer callback, captured as data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlgorithmEvent<V> {
    Started { algorithm: AlgorithmKind },
    Visited { vertex: V },
    SearchFinished,
    VertexFinished { vertex: V, cost: Cost },
    DijkstraFinished { path: Vec<V> },
}

/// Observer that records every callback in arrival order.
///
/// Useful for step-by-step replays: register it, run an algorithm, then read
/// [`events`](RecordingObserver::events).
#[derive(Debug)]
pub struct RecordingObserver<V> {
    events: Mutex<Vec<AlgorithmEvent<V>>>,
}

impl<V: Clone> RecordingObserver<V> {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AlgorithmEvent<V>>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, event: AlgorithmEvent<V>) {
        self.lock().push(event);
    }

    /// Snapshot of all recorded events
    pub fn events(&self) -> Vec<AlgorithmEvent<V>> {
        self.lock().clone()
    }

    /// Vertices reported through `on_vertex_visited`, in order
    pub fn visited(&self) -> Vec<V> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                AlgorithmEvent::Visited { vertex } => Some(vertex.clone()),
                _ => None,
            })
            .collect()
    }

    /// Vertices and costs reported through `on_dijkstra_vertex_finished`, in order
    pub fn finished_costs(&self) -> Vec<(V, Cost)> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                AlgorithmEvent::VertexFinished { vertex, cost } => Some((vertex.clone(), *cost)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl<V: Clone> Default for RecordingObserver<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + std::fmt::Debug> GraphObserver<V> for RecordingObserver<V> {
    fn on_algorithm_started(&self, kind: AlgorithmKind) {
        tracing::trace!(algorithm = %kind, "algorithm_started");
        self.record(AlgorithmEvent::Started { algorithm: kind });
    }

    fn on_vertex_visited(&self, vertex: &V) {
        tracing::trace!(vertex = ?vertex, "vertex_visited");
        self.record(AlgorithmEvent::Visited {
            vertex: vertex.clone(),
        });
    }

    fn on_search_finished(&self) {
        tracing::trace!("search_finished");
        self.record(AlgorithmEvent::SearchFinished);
    }

    fn on_dijkstra_vertex_finished(&self, vertex: &V, cost: Cost) {
        tracing::trace!(vertex = ?vertex, cost = %cost, "vertex_finished");
        self.record(AlgorithmEvent::VertexFinished {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn on_dijkstra_finished(&self, path: &[V]) {
        tracing::trace!(path_len = path.len(), "dijkstra_finished");
        self.record(AlgorithmEvent::DijkstraFinished {
            path: path.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_set_deduplicates_same_allocation() {
        let mut set: ObserverSet<&str> = ObserverSet::new();
        let recorder = Arc::new(RecordingObserver::new());

        assert!(set.insert(recorder.clone()));
        assert!(!set.insert(recorder.clone()));
        assert_eq!(set.len(), 1);

        // A distinct observer with equal contents is still a different observer
        assert!(set.insert(Arc::new(RecordingObserver::new())));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_notify_reaches_every_observer() {
        let mut set: ObserverSet<&str> = ObserverSet::new();
        let first = Arc::new(RecordingObserver::new());
        let second = Arc::new(RecordingObserver::new());
        set.insert(first.clone());
        set.insert(second.clone());

        set.notify(|o| o.on_vertex_visited(&"A"));

        assert_eq!(first.visited(), vec!["A"]);
        assert_eq!(second.visited(), vec!["A"]);
    }

    #[test]
    fn test_recording_observer_captures_all_callbacks() {
        let recorder: RecordingObserver<&str> = RecordingObserver::new();
        recorder.on_algorithm_started(AlgorithmKind::Dijkstra);
        recorder.on_dijkstra_vertex_finished(&"A", Cost::ZERO);
        recorder.on_dijkstra_finished(&["A"]);

        assert_eq!(
            recorder.events(),
            vec![
                AlgorithmEvent::Started {
                    algorithm: AlgorithmKind::Dijkstra
                },
                AlgorithmEvent::VertexFinished {
                    vertex: "A",
                    cost: Cost::ZERO
                },
                AlgorithmEvent::DijkstraFinished { path: vec!["A"] },
            ]
        );
        assert_eq!(recorder.finished_costs(), vec![("A", Cost::ZERO)]);

        recorder.clear();
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_default_methods_are_noops() {
        struct Quiet;
        impl GraphObserver<u32> for Quiet {}

        let quiet = Quiet;
        quiet.on_algorithm_started(AlgorithmKind::Bfs);
        quiet.on_vertex_visited(&1);
        quiet.on_search_finished();
    }

    #[test]
    fn test_event_json_shape() {
        let event = AlgorithmEvent::VertexFinished {
            vertex: "B",
            cost: Cost::Finite(3),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"event": "vertex_finished", "vertex": "B", "cost": 3})
        );

        let json = serde_json::to_value(AlgorithmEvent::<&str>::SearchFinished).unwrap();
        assert_eq!(json, serde_json::json!({"event": "search_finished"}));
    }
}
