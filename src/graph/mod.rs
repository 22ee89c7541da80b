//! Graph store for the animator
//!
//! This module implements the editable graph the traversals walk:
//! - Vertices with canvas positions and ordered adjacency lists
//! - Weighted edges, directed or undirected
//! - Per-element traversal states with one-way transitions
//! - Visual events describing each state change
//! - Random graph generation

pub mod edge;
pub mod event;
pub mod random;
pub mod state;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use event::{Annotation, Distance, VisualEvent};
pub use random::{create_randomized_graph, RandomGraphConfig};
pub use state::{EdgeState, VertexState};
pub use store::{Graph, GraphError, GraphResult};
pub use types::{Bounds, EdgeId, Position, VertexId};
pub use vertex::Vertex;
