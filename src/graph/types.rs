//! Core type definitions for the animated graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a vertex
///
/// Assigned in insertion order starting at 0 and never reused, so it doubles
/// as the vertex's index in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        VertexId(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        VertexId(id)
    }
}

/// Unique identifier for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        EdgeId(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<usize> for EdgeId {
    fn from(id: usize) -> Self {
        EdgeId(id)
    }
}

/// Canvas position of a vertex center. Only the renderer and hit-testing look at it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Midpoint between two positions (where edge weights are drawn)
    pub fn midpoint(&self, other: &Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Drawable area of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Bounds { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(1520.0, 1080.0)
    }
}
