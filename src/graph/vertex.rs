//! Vertex implementation

use super::state::VertexState;
use super::types::{EdgeId, Position, VertexId};
use serde::{Deserialize, Serialize};

/// A vertex on the canvas
///
/// Vertices have:
/// - A unique ID, assigned by the store in insertion order
/// - A canvas position (opaque to the traversal engine)
/// - Outgoing edges (every undirected edge touching it, plus directed edges leaving it)
/// - Incoming edges (directed edges only)
/// - A traversal state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: VertexId,

    /// Center of the vertex on the canvas
    pub position: Position,

    /// Edges a traversal may follow from this vertex, in insertion order
    pub(crate) outgoing: Vec<EdgeId>,

    /// Directed edges ending at this vertex
    pub(crate) incoming: Vec<EdgeId>,

    /// Traversal state
    pub state: VertexState,
}

impl Vertex {
    /// Create a new unexplored vertex without edges
    pub fn new(id: VertexId, position: Position) -> Self {
        Vertex {
            id,
            position,
            outgoing: Vec::new(),
            incoming: Vec::new(),
            state: VertexState::Unexplored,
        }
    }

    /// Edges a traversal may follow from this vertex
    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Directed edges pointing at this vertex
    pub fn incoming_edges(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn is_explored(&self) -> bool {
        self.state.is_explored()
    }

    pub fn degree(&self) -> usize {
        self.outgoing.len() + self.incoming.len()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_vertex() {
        let vertex = Vertex::new(VertexId::new(3), Position::new(10.0, 20.0));

        assert_eq!(vertex.id, VertexId::new(3));
        assert_eq!(vertex.position, Position::new(10.0, 20.0));
        assert!(vertex.outgoing_edges().is_empty());
        assert!(vertex.incoming_edges().is_empty());
        assert_eq!(vertex.state, VertexState::Unexplored);
        assert!(!vertex.is_explored());
        assert_eq!(vertex.degree(), 0);
    }

    #[test]
    fn test_vertex_equality_by_id() {
        let a = Vertex::new(VertexId::new(1), Position::new(0.0, 0.0));
        let b = Vertex::new(VertexId::new(1), Position::new(5.0, 5.0));
        let c = Vertex::new(VertexId::new(2), Position::new(0.0, 0.0));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
