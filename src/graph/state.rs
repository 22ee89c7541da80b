//! Traversal states of vertices and edges
//!
//! Both state sets are one-way within a run: a traversal may only move an
//! element out of `Unexplored`, and only `Graph::reset` moves it back. The
//! single exception is a shortest-path run labelling its final path tree,
//! which withdraws relaxations that a cheaper path replaced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a vertex during a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VertexState {
    #[default]
    Unexplored,
    Explored,
}

impl VertexState {
    /// Whether a traversal may move a vertex from `self` to `next`
    pub fn can_transition_to(self, next: VertexState) -> bool {
        matches!((self, next), (VertexState::Unexplored, VertexState::Explored))
    }

    pub fn is_explored(self) -> bool {
        self == VertexState::Explored
    }
}

impl fmt::Display for VertexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexState::Unexplored => write!(f, "unexplored"),
            VertexState::Explored => write!(f, "explored"),
        }
    }
}

/// Classification of an edge during a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EdgeState {
    #[default]
    Unexplored,
    /// Edge used to first reach its far endpoint (tree edge)
    Discovery,
    /// DFS: edge to an already explored endpoint
    Back,
    /// BFS: edge to an already explored endpoint
    Cross,
    /// Edge that improved a shortest-distance label
    Relaxed,
}

impl EdgeState {
    /// Whether a traversal may move an edge from `self` to `next`.
    ///
    /// Classification happens once per run. Re-relaxing an already relaxed
    /// edge is tolerated since it leaves the label unchanged.
    pub fn can_transition_to(self, next: EdgeState) -> bool {
        match (self, next) {
            (EdgeState::Unexplored, EdgeState::Unexplored) => false,
            (EdgeState::Unexplored, _) => true,
            (EdgeState::Relaxed, EdgeState::Relaxed) => true,
            _ => false,
        }
    }

    pub fn is_unexplored(self) -> bool {
        self == EdgeState::Unexplored
    }
}

impl fmt::Display for EdgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeState::Unexplored => "unexplored",
            EdgeState::Discovery => "discovery",
            EdgeState::Back => "back",
            EdgeState::Cross => "cross",
            EdgeState::Relaxed => "relaxed",
        };
        write!(f, "{}", name)
    }
}
