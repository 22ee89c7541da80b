//! Traversal engine
//!
//! Depth-first search, breadth-first search and shortest path, each written
//! as a step machine over the [`Graph`](crate::graph::Graph) so a run can be
//! paced one visual event at a time.

pub mod bfs;
pub mod common;
pub mod dfs;
pub mod shortest_path;

pub use bfs::BreadthFirst;
pub use common::{drain, Algorithm, EngineError, EngineResult, Traversal};
pub use dfs::DepthFirst;
pub use shortest_path::{FrontierStrategy, RelaxationLabels, ShortestPath, ShortestPathOptions};

use crate::graph::{Graph, VertexId};

/// Build a fresh traversal of `algorithm` starting at `start`
pub fn traversal_for(
    algorithm: Algorithm,
    graph: &Graph,
    start: VertexId,
    shortest_path: ShortestPathOptions,
) -> EngineResult<Box<dyn Traversal + Send>> {
    Ok(match algorithm {
        Algorithm::DepthFirst => Box::new(DepthFirst::new(graph, start)?),
        Algorithm::BreadthFirst => Box::new(BreadthFirst::new(graph, start)?),
        Algorithm::ShortestPath => Box::new(ShortestPath::with_options(graph, start, shortest_path)?),
    })
}
