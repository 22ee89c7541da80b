//! Edge implementation
//!
//! An edge always joins two distinct vertices. Directed edges go from
//! `vertex0` to `vertex1`; undirected edges can be followed from both ends.

use super::state::EdgeState;
use super::types::{EdgeId, VertexId};
use serde::{Deserialize, Serialize};

/// A weighted, optionally directed edge
///
/// Endpoints, weight and direction are fixed at construction; only the
/// traversal state changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// First endpoint (source when directed)
    pub vertex0: VertexId,

    /// Second endpoint (target when directed)
    pub vertex1: VertexId,

    /// Non-negative weight, zero for unweighted edges
    pub weight: u64,

    /// Whether the edge can only be followed from `vertex0`
    pub directed: bool,

    /// Traversal classification
    pub state: EdgeState,
}

impl Edge {
    /// Create a new unexplored edge. Negative weights are clamped to zero.
    pub fn new(id: EdgeId, vertex0: VertexId, vertex1: VertexId, weight: i64, directed: bool) -> Self {
        Edge {
            id,
            vertex0,
            vertex1,
            weight: clamp_weight(weight),
            directed,
            state: EdgeState::Unexplored,
        }
    }

    /// Endpoint on the other side of `vertex`, or `None` if `vertex` is not an endpoint
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.vertex0 == vertex {
            Some(self.vertex1)
        } else if self.vertex1 == vertex {
            Some(self.vertex0)
        } else {
            None
        }
    }

    /// Check if this edge connects two specific vertices (in either direction)
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.vertex0 == a && self.vertex1 == b) || (self.vertex0 == b && self.vertex1 == a)
    }

    /// Weight label shown next to the edge; unweighted edges show nothing
    pub fn weight_label(&self) -> Option<String> {
        (self.weight != 0).then(|| self.weight.to_string())
    }
}

/// Clamp a raw weight to the non-negative range
pub fn clamp_weight(weight: i64) -> u64 {
    weight.max(0) as u64
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
