//! Visual events produced by traversals
//!
//! Every state change a traversal makes is reported as exactly one event; the
//! scheduler turns events into draw calls and paces them.

use super::state::EdgeState;
use super::types::{EdgeId, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest-path distance label
///
/// Variant order makes every finite distance compare below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn as_finite(&self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }

    /// Distance after following an edge of `weight`; infinity absorbs everything
    pub fn extend(&self, weight: u64) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "\u{221E}"),
        }
    }
}

/// Per-run text drawn under a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Annotation {
    /// BFS hop distance from the root of its component
    Level(usize),
    /// Shortest known distance from the start vertex
    Distance(Distance),
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Level(level) => write!(f, "Level: {}", level),
            Annotation::Distance(distance) => write!(f, "Distance: {}", distance),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VisualEvent {
    /// A vertex moved to `Explored`
    VertexExplored {
        vertex: VertexId,
        annotation: Option<Annotation>,
    },
    /// A vertex annotation changed without a state change
    VertexAnnotated {
        vertex: VertexId,
        annotation: Annotation,
    },
    /// An edge received its classification
    EdgeClassified { edge: EdgeId, state: EdgeState },
    /// An edge is being looked at; highlight only
    EdgeExamined { edge: EdgeId },
    /// A shortest-distance label improved; the vertex is highlighted
    DistanceImproved { vertex: VertexId, distance: Distance },
    /// Highlight removed from a vertex, keeping its annotation
    VertexRestored {
        vertex: VertexId,
        annotation: Annotation,
    },
}

impl VisualEvent {
    /// Vertex the event draws, if any
    pub fn vertex(&self) -> Option<VertexId> {
        match self {
            VisualEvent::VertexExplored { vertex, .. }
            | VisualEvent::VertexAnnotated { vertex, .. }
            | VisualEvent::DistanceImproved { vertex, .. }
            | VisualEvent::VertexRestored { vertex, .. } => Some(*vertex),
            VisualEvent::EdgeClassified { .. } | VisualEvent::EdgeExamined { .. } => None,
        }
    }

    /// Edge the event draws, if any
    pub fn edge(&self) -> Option<EdgeId> {
        match self {
            VisualEvent::EdgeClassified { edge, .. } | VisualEvent::EdgeExamined { edge } => Some(*edge),
            _ => None,
        }
    }
}
