//! In-memory graph storage
//!
//! Vertices and edges live in insertion-ordered arenas indexed by their ids.
//! Nothing is ever removed: clearing the canvas replaces the whole graph.

use super::edge::Edge;
use super::state::{EdgeState, VertexState};
use super::types::{EdgeId, Position, VertexId};
use super::vertex::Vertex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Invalid edge: self-loop on vertex {0}")]
    SelfLoop(VertexId),

    #[error("Vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint { edge: EdgeId, vertex: VertexId },

    #[error("Illegal transition of {element} from {from} to {to}")]
    IllegalTransition {
        element: String,
        from: String,
        to: String,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
///
/// - vertices: VertexId -> Vertex (dense arena, id == index)
/// - edges: EdgeId -> Edge (dense arena, id == index)
/// - adjacency is kept on each vertex as ordered edge id lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    /// Vertex storage in insertion order
    vertices: Vec<Vertex>,

    /// Edge storage in insertion order
    edges: Vec<Edge>,

    /// Next vertex ID
    next_vertex_id: usize,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
            next_vertex_id: 0,
        }
    }

    /// Insert a vertex at `position` with the next sequential id
    pub fn insert_vertex(&mut self, position: Position) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.push(Vertex::new(id, position));
        id
    }

    /// Insert an edge between two existing vertices
    ///
    /// Negative weights are clamped to zero. The edge is outgoing at `vertex0`;
    /// at `vertex1` it is incoming when directed and outgoing otherwise.
    /// Duplicate parallel edges are not rejected here, see [`Graph::has_edge_between`].
    pub fn insert_edge(
        &mut self,
        vertex0: VertexId,
        vertex1: VertexId,
        weight: i64,
        directed: bool,
    ) -> GraphResult<EdgeId> {
        if !self.has_vertex(vertex0) {
            return Err(GraphError::VertexNotFound(vertex0));
        }
        if !self.has_vertex(vertex1) {
            return Err(GraphError::VertexNotFound(vertex1));
        }
        if vertex0 == vertex1 {
            return Err(GraphError::SelfLoop(vertex0));
        }

        let edge_id = EdgeId::new(self.edges.len());
        let edge = Edge::new(edge_id, vertex0, vertex1, weight, directed);

        // Update adjacency lists
        self.vertices[vertex0.index()].outgoing.push(edge_id);
        if directed {
            self.vertices[vertex1.index()].incoming.push(edge_id);
        } else {
            self.vertices[vertex1.index()].outgoing.push(edge_id);
        }

        self.edges.push(edge);
        Ok(edge_id)
    }

    /// Set every vertex and edge back to `Unexplored`. Topology and positions are untouched.
    pub fn reset(&mut self) {
        for vertex in &mut self.vertices {
            vertex.state = VertexState::Unexplored;
        }
        for edge in &mut self.edges {
            edge.state = EdgeState::Unexplored;
        }
    }

    /// Get a vertex by ID
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Get an edge by ID
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Check if a vertex exists
    pub fn has_vertex(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// Whether any edge joins `a` and `b`, in either orientation
    pub fn has_edge_between(&self, a: VertexId, b: VertexId) -> bool {
        self.vertex(a)
            .map(|v| {
                v.outgoing
                    .iter()
                    .chain(v.incoming.iter())
                    .filter_map(|&id| self.edge(id))
                    .any(|e| e.connects(a, b))
            })
            .unwrap_or(false)
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges a traversal may follow from `id`
    pub fn outgoing(&self, id: VertexId) -> GraphResult<&[EdgeId]> {
        self.vertex(id)
            .map(|v| v.outgoing_edges())
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Directed edges pointing at `id`
    pub fn incoming(&self, id: VertexId) -> GraphResult<&[EdgeId]> {
        self.vertex(id)
            .map(|v| v.incoming_edges())
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Endpoint of `edge` on the other side of `vertex`
    pub fn opposite(&self, edge: EdgeId, vertex: VertexId) -> GraphResult<VertexId> {
        let e = self.edge(edge).ok_or(GraphError::EdgeNotFound(edge))?;
        e.opposite(vertex)
            .ok_or(GraphError::NotAnEndpoint { edge, vertex })
    }

    /// Positions of both endpoints of an edge
    pub fn endpoints(&self, edge: EdgeId) -> GraphResult<(Position, Position)> {
        let e = self.edge(edge).ok_or(GraphError::EdgeNotFound(edge))?;
        let from = self.vertex(e.vertex0).ok_or(GraphError::VertexNotFound(e.vertex0))?;
        let to = self.vertex(e.vertex1).ok_or(GraphError::VertexNotFound(e.vertex1))?;
        Ok((from.position, to.position))
    }

    pub fn vertex_state(&self, id: VertexId) -> GraphResult<VertexState> {
        self.vertex(id)
            .map(|v| v.state)
            .ok_or(GraphError::VertexNotFound(id))
    }

    pub fn edge_state(&self, id: EdgeId) -> GraphResult<EdgeState> {
        self.edge(id)
            .map(|e| e.state)
            .ok_or(GraphError::EdgeNotFound(id))
    }

    /// Move a vertex to `Explored`
    pub fn mark_explored(&mut self, id: VertexId) -> GraphResult<()> {
        let vertex = self
            .vertices
            .get_mut(id.index())
            .ok_or(GraphError::VertexNotFound(id))?;
        if !vertex.state.can_transition_to(VertexState::Explored) {
            return Err(GraphError::IllegalTransition {
                element: id.to_string(),
                from: vertex.state.to_string(),
                to: VertexState::Explored.to_string(),
            });
        }
        vertex.state = VertexState::Explored;
        Ok(())
    }

    /// Classify an edge
    pub fn classify_edge(&mut self, id: EdgeId, next: EdgeState) -> GraphResult<()> {
        let edge = self
            .edges
            .get_mut(id.index())
            .ok_or(GraphError::EdgeNotFound(id))?;
        if !edge.state.can_transition_to(next) {
            return Err(GraphError::IllegalTransition {
                element: id.to_string(),
                from: edge.state.to_string(),
                to: next.to_string(),
            });
        }
        edge.state = next;
        Ok(())
    }

    /// Return a relaxed edge to `Unexplored` once a cheaper path replaced it.
    ///
    /// Only used when shortest-path runs label the final path tree.
    pub fn withdraw_relaxation(&mut self, id: EdgeId) -> GraphResult<()> {
        let edge = self
            .edges
            .get_mut(id.index())
            .ok_or(GraphError::EdgeNotFound(id))?;
        if edge.state != EdgeState::Relaxed {
            return Err(GraphError::IllegalTransition {
                element: id.to_string(),
                from: edge.state.to_string(),
                to: EdgeState::Unexplored.to_string(),
            });
        }
        edge.state = EdgeState::Unexplored;
        Ok(())
    }

    /// First unexplored vertex at or after `from` in insertion order
    pub fn next_unexplored(&self, from: usize) -> Option<VertexId> {
        self.vertices
            .iter()
            .skip(from)
            .find(|v| !v.is_explored())
            .map(|v| v.id)
    }

    /// Get total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f64, y: f64) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_insert_and_get_vertex() {
        let mut graph = Graph::new();
        let v0 = graph.insert_vertex(pos(10.0, 10.0));
        let v1 = graph.insert_vertex(pos(200.0, 10.0));

        assert_eq!(v0, VertexId::new(0));
        assert_eq!(v1, VertexId::new(1));
        assert_eq!(graph.vertex_count(), 2);

        let vertex = graph.vertex(v1).unwrap();
        assert_eq!(vertex.position, pos(200.0, 10.0));
        assert_eq!(vertex.state, VertexState::Unexplored);
    }

    #[test]
    fn test_insert_and_get_edge() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(pos(0.0, 0.0));
        let b = graph.insert_vertex(pos(100.0, 0.0));

        let id = graph.insert_edge(a, b, 4, true).unwrap();
        let edge = graph.edge(id).unwrap();
        assert_eq!(edge.vertex0, a);
        assert_eq!(edge.vertex1, b);
        assert_eq!(edge.weight, 4);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_edge_validation() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(pos(0.0, 0.0));

        assert_eq!(
            graph.insert_edge(a, VertexId::new(9), 1, false),
            Err(GraphError::VertexNotFound(VertexId::new(9)))
        );
        assert_eq!(
            graph.insert_edge(VertexId::new(9), a, 1, false),
            Err(GraphError::VertexNotFound(VertexId::new(9)))
        );
        assert_eq!(graph.insert_edge(a, a, 1, false), Err(GraphError::SelfLoop(a)));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_directed_adjacency() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(pos(0.0, 0.0));
        let b = graph.insert_vertex(pos(100.0, 0.0));
        let e = graph.insert_edge(a, b, 1, true).unwrap();

        assert_eq!(graph.outgoing(a).unwrap(), &[e]);
        assert!(graph.incoming(a).unwrap().is_empty());
        assert!(graph.outgoing(b).unwrap().is_empty());
        assert_eq!(graph.incoming(b).unwrap(), &[e]);
    }

    #[test]
    fn test_undirected_adjacency() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(pos(0.0, 0.0));
        let b = graph.insert_vertex(pos(100.0, 0.0));
        let e = graph.insert_edge(a, b, 1, false).unwrap();

        // Undirected edges are outgoing at both ends
        assert_eq!(graph.outgoing(a).unwrap(), &[e]);
        assert_eq!(graph.outgoing(b).unwrap(), &[e]);
        assert!(graph.incoming(b).unwrap().is_empty());
    }

    #[test]
    fn test_has_edge_between_ignores_orientation() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(pos(0.0, 0.0));
        let b = graph.insert_vertex(pos(100.0, 0.0));
        let c = graph.insert_vertex(pos(200.0, 0.0));
        graph.insert_edge(a, b, 1, true).unwrap();

        assert!(graph.has_edge_between(a, b));
        assert!(graph.has_edge_between(b, a));
        assert!(!graph.has_edge_between(a, c));
        assert!(!graph.has_edge_between(VertexId::new(42), a));
    }

    #[test]
    fn test_opposite() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(pos(0.0, 0.0));
        let b = graph.insert_vertex(pos(100.0, 0.0));
        let c = graph.insert_vertex(pos(200.0, 0.0));
        let e = graph.insert_edge(a, b, 0, false).unwrap();

        assert_eq!(graph.opposite(e, a), Ok(b));
        assert_eq!(graph.opposite(e, b), Ok(a));
        assert_eq!(
            graph.opposite(e, c),
            Err(GraphError::NotAnEndpoint { edge: e, vertex: c })
        );
        assert_eq!(
            graph.opposite(EdgeId::new(5), a),
            Err(GraphError::EdgeNotFound(EdgeId::new(5)))
        );
    }

    #[test]
    fn test_state_transitions() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(pos(0.0, 0.0));
        let b = graph.insert_vertex(pos(100.0, 0.0));
        let e = graph.insert_edge(a, b, 0, false).unwrap();

        graph.mark_explored(a).unwrap();
        assert!(graph.mark_explored(a).is_err());

        graph.classify_edge(e, EdgeState::Discovery).unwrap();
        assert!(matches!(
            graph.classify_edge(e, EdgeState::Back),
            Err(GraphError::IllegalTransition { .. })
        ));
        assert_eq!(graph.edge_state(e), Ok(EdgeState::Discovery));
    }

    #[test]
    fn test_withdraw_relaxation() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(pos(0.0, 0.0));
        let b = graph.insert_vertex(pos(100.0, 0.0));
        let e = graph.insert_edge(a, b, 0, true).unwrap();

        assert!(graph.withdraw_relaxation(e).is_err());
        graph.classify_edge(e, EdgeState::Relaxed).unwrap();
        graph.withdraw_relaxation(e).unwrap();
        assert_eq!(graph.edge_state(e), Ok(EdgeState::Unexplored));
    }

    #[test]
    fn test_reset_keeps_topology() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(pos(0.0, 0.0));
        let b = graph.insert_vertex(pos(100.0, 0.0));
        let e = graph.insert_edge(a, b, 3, false).unwrap();

        graph.mark_explored(a).unwrap();
        graph.mark_explored(b).unwrap();
        graph.classify_edge(e, EdgeState::Discovery).unwrap();

        graph.reset();

        assert_eq!(graph.vertex_state(a), Ok(VertexState::Unexplored));
        assert_eq!(graph.vertex_state(b), Ok(VertexState::Unexplored));
        assert_eq!(graph.edge_state(e), Ok(EdgeState::Unexplored));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.vertex(b).unwrap().position, pos(100.0, 0.0));
        assert_eq!(graph.outgoing(a).unwrap(), &[e]);
    }

    #[test]
    fn test_next_unexplored() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(pos(0.0, 0.0));
        let b = graph.insert_vertex(pos(100.0, 0.0));
        let c = graph.insert_vertex(pos(200.0, 0.0));

        graph.mark_explored(a).unwrap();
        graph.mark_explored(c).unwrap();

        assert_eq!(graph.next_unexplored(0), Some(b));
        assert_eq!(graph.next_unexplored(2), None);
    }
}
