//! Graph Traversal Animator
//!
//! An editable graph of positioned vertices and weighted edges, and three
//! traversals over it (depth-first search, breadth-first search and Dijkstra's
//! shortest paths) that are played back one visual event at a time.
//!
//! # Architecture
//!
//! - [`graph`]: vertex and edge store, traversal states, random generation
//! - [`algo`]: traversals as step machines producing [`VisualEvent`]s
//! - [`scheduler`]: paces events onto a [`RenderAdapter`]
//! - [`session`]: owns the graph, the running flag and the step delay
//! - [`render`]: drawing boundary, colors and hit-testing geometry
//! - [`input`]: canvas clicks turned into graph edits
//! - [`config`]: YAML configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use graph_animator::algo::{drain, DepthFirst};
//! use graph_animator::graph::{EdgeId, EdgeState, Graph, Position};
//!
//! let mut graph = Graph::new();
//! let a = graph.insert_vertex(Position::new(100.0, 100.0));
//! let b = graph.insert_vertex(Position::new(300.0, 100.0));
//! let c = graph.insert_vertex(Position::new(200.0, 300.0));
//! graph.insert_edge(a, b, 0, false).unwrap();
//! graph.insert_edge(b, c, 0, false).unwrap();
//! graph.insert_edge(a, c, 0, false).unwrap();
//!
//! let mut dfs = DepthFirst::new(&graph, a).unwrap();
//! let events = drain(&mut graph, &mut dfs).unwrap();
//! assert_eq!(events.len(), 6);
//! assert_eq!(graph.edge(EdgeId::new(2)).unwrap().state, EdgeState::Back);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod session;

// Re-export main types for convenience
pub use graph::{
    create_randomized_graph, Annotation, Distance, Edge, EdgeId, EdgeState, Graph, GraphError,
    GraphResult, Position, RandomGraphConfig, Vertex, VertexId, VertexState, VisualEvent,
};

pub use algo::{
    drain, Algorithm, BreadthFirst, DepthFirst, EngineError, EngineResult, FrontierStrategy,
    RelaxationLabels, ShortestPath, ShortestPathOptions, Traversal,
};

pub use render::{Color, DrawCommand, Palette, RecordingRenderer, RenderAdapter, TextRenderer};

pub use scheduler::{RunReport, Scheduler, StepDelay};

pub use session::{EditOutcome, RunOutcome, Session};

pub use input::{CanvasInput, ClickOutcome};

pub use config::{AnimatorConfig, ConfigError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
