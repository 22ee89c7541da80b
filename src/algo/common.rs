//! Shared pieces of the traversal engine
//!
//! Every algorithm is a step machine: each call to [`Traversal::step`] applies
//! the state changes behind exactly one visual event and returns that event.
//! The scheduler paces the calls; tests drain them synchronously.

use crate::graph::{Annotation, Graph, GraphError, GraphResult, VertexId, VisualEvent};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when starting a traversal
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    /// Precondition violation: the start vertex must belong to the graph
    #[error("Start vertex {0} is not part of the graph")]
    StartVertexNotFound(VertexId),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// The traversals the animator can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    ShortestPath,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::DepthFirst => write!(f, "depth-first search"),
            Algorithm::BreadthFirst => write!(f, "breadth-first search"),
            Algorithm::ShortestPath => write!(f, "shortest path"),
        }
    }
}

/// A resumable traversal over a [`Graph`]
///
/// A value covers a single run; start a fresh one to run again.
pub trait Traversal {
    fn algorithm(&self) -> Algorithm;

    /// Vertex the run was started from
    fn start(&self) -> VertexId;

    /// Events drawn once before the first step, without pacing
    fn prelude(&self, _graph: &Graph) -> Vec<VisualEvent> {
        Vec::new()
    }

    /// Advance by one visual event. `Ok(None)` once every vertex is explored.
    fn step(&mut self, graph: &mut Graph) -> GraphResult<Option<VisualEvent>>;

    /// Per-vertex annotations collected so far, indexed by vertex id
    fn annotations(&self) -> Vec<Option<Annotation>> {
        Vec::new()
    }
}

/// Check the start vertex precondition shared by all traversals
pub(crate) fn require_vertex(graph: &Graph, start: VertexId) -> EngineResult<()> {
    if graph.has_vertex(start) {
        Ok(())
    } else {
        Err(EngineError::StartVertexNotFound(start))
    }
}

/// Hands out the roots of a full-graph forest: the start vertex first, then
/// every vertex still unexplored, in insertion order
#[derive(Debug, Clone)]
pub(crate) struct Roots {
    origin: VertexId,
    start: Option<VertexId>,
    scan_from: usize,
}

impl Roots {
    pub(crate) fn new(start: VertexId) -> Self {
        Roots {
            origin: start,
            start: Some(start),
            scan_from: 0,
        }
    }

    pub(crate) fn origin(&self) -> VertexId {
        self.origin
    }

    pub(crate) fn next(&mut self, graph: &Graph) -> Option<VertexId> {
        if let Some(start) = self.start.take() {
            if graph.vertex(start).is_some_and(|v| !v.is_explored()) {
                return Some(start);
            }
        }
        let root = graph.next_unexplored(self.scan_from)?;
        self.scan_from = root.index() + 1;
        Some(root)
    }
}

/// Run a traversal to completion without pacing, returning every event in order
pub fn drain<T: Traversal + ?Sized>(graph: &mut Graph, traversal: &mut T) -> GraphResult<Vec<VisualEvent>> {
    let mut events = traversal.prelude(graph);
    while let Some(event) = traversal.step(graph)? {
        events.push(event);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Position;

    #[test]
    fn test_roots_start_first_then_insertion_order() {
        let mut graph = Graph::new();
        for i in 0..4 {
            graph.insert_vertex(Position::new(i as f64 * 100.0, 0.0));
        }

        let mut roots = Roots::new(VertexId::new(2));
        assert_eq!(roots.next(&graph), Some(VertexId::new(2)));
        graph.mark_explored(VertexId::new(2)).unwrap();

        assert_eq!(roots.next(&graph), Some(VertexId::new(0)));
        graph.mark_explored(VertexId::new(0)).unwrap();
        graph.mark_explored(VertexId::new(1)).unwrap();

        assert_eq!(roots.next(&graph), Some(VertexId::new(3)));
        graph.mark_explored(VertexId::new(3)).unwrap();
        assert_eq!(roots.next(&graph), None);
    }

    #[test]
    fn test_require_vertex() {
        let mut graph = Graph::new();
        let v = graph.insert_vertex(Position::default());

        assert!(require_vertex(&graph, v).is_ok());
        assert_eq!(
            require_vertex(&graph, VertexId::new(3)),
            Err(EngineError::StartVertexNotFound(VertexId::new(3)))
        );
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::DepthFirst.to_string(), "depth-first search");
        assert_eq!(Algorithm::ShortestPath.to_string(), "shortest path");
    }
}
