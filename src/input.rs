//! Canvas click handling
//!
//! Clicks become graph edits: a click on a vertex selects it, a click on a
//! second vertex joins the two with an edge, and a click on empty canvas
//! places a new vertex. Clicks crowding an existing vertex are dropped.

use crate::graph::{EdgeId, Graph, Position, VertexId};
use crate::render::geometry::{is_near_vertex, is_on_vertex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a click did to the graph or the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    Selected(VertexId),
    Deselected(VertexId),
    EdgeInserted(EdgeId),
    VertexInserted(VertexId),
    /// Nothing changed except possibly the selection being dropped
    Ignored,
}

/// Parse the weight text field. Anything unparsable counts as 0, negatives are clamped.
pub fn parse_weight(text: &str) -> i64 {
    let trimmed = text.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse::<i64>().map(|w| w.max(0)).unwrap_or(0)
}

/// Selection state and edge settings of the editing canvas
#[derive(Debug, Clone)]
pub struct CanvasInput {
    radius: f64,
    selected: Option<VertexId>,
    /// Raw contents of the weight field
    pub weight_text: String,
    /// Whether new edges are directed
    pub directed: bool,
}

impl CanvasInput {
    pub fn new(radius: f64) -> Self {
        CanvasInput {
            radius,
            selected: None,
            weight_text: String::new(),
            directed: false,
        }
    }

    pub fn selected(&self) -> Option<VertexId> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Apply a click at `point` to `graph`
    pub fn click(&mut self, graph: &mut Graph, point: Position) -> ClickOutcome {
        let hit = graph
            .vertices()
            .iter()
            .find(|v| is_on_vertex(point, v.position, self.radius))
            .map(|v| v.id);

        if let Some(vertex) = hit {
            return self.click_vertex(graph, vertex);
        }

        if graph
            .vertices()
            .iter()
            .any(|v| is_near_vertex(point, v.position, self.radius))
        {
            self.selected = None;
            return ClickOutcome::Ignored;
        }

        let vertex = graph.insert_vertex(point);
        debug!("Inserted {} at {}", vertex, point);
        ClickOutcome::VertexInserted(vertex)
    }

    fn click_vertex(&mut self, graph: &mut Graph, vertex: VertexId) -> ClickOutcome {
        let Some(first) = self.selected.take() else {
            self.selected = Some(vertex);
            return ClickOutcome::Selected(vertex);
        };

        if first == vertex {
            return ClickOutcome::Deselected(vertex);
        }
        if graph.has_edge_between(first, vertex) {
            return ClickOutcome::Ignored;
        }

        let weight = parse_weight(&self.weight_text);
        match graph.insert_edge(first, vertex, weight, self.directed) {
            Ok(edge) => {
                debug!("Inserted {} from {} to {}", edge, first, vertex);
                ClickOutcome::EdgeInserted(edge)
            }
            Err(e) => {
                debug!("Dropped edge click: {}", e);
                ClickOutcome::Ignored
            }
        }
    }
}
