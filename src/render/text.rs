//! Line-oriented renderer for terminals and logs

use super::{geometry, Color, Palette, RenderAdapter};
use crate::graph::{Edge, Position, Vertex};
use std::io::Write;
use tracing::warn;

/// Length of each arrowhead barb
const ARROW_SIDE: f64 = 15.0;

/// Writes one line per draw call to any [`Write`] sink
///
/// Edge lines carry the border-to-border segment a canvas would stroke, the
/// arrowhead barbs of directed edges and the weight label position.
pub struct TextRenderer<W: Write> {
    out: W,
    radius: f64,
    background: Color,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, radius: f64) -> Self {
        Self {
            out,
            radius,
            background: Palette::default().background,
        }
    }

    /// Fill used by `clear` and behind weight labels
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args) {
            warn!("Failed to write draw call: {}", e);
        }
    }
}

impl<W: Write> RenderAdapter for TextRenderer<W> {
    fn draw_vertex(&mut self, vertex: &Vertex, color: Color) {
        self.line(format_args!(
            "vertex {:>3} {} at {} ({})",
            vertex.id.index(),
            color,
            vertex.position,
            vertex.state
        ));
    }

    fn draw_vertex_annotation(&mut self, vertex: &Vertex, text: &str) {
        self.line(format_args!("  note {:>3} {}", vertex.id.index(), text));
    }

    fn draw_edge(&mut self, edge: &Edge, from: Position, to: Position, color: Color) {
        let (start, end) = geometry::edge_segment(from, to, self.radius);
        let (arrow, barbs) = if edge.directed {
            let (left, right) = geometry::arrowhead(start, end, ARROW_SIDE);
            ("->", format!(" barbs {} {}", left, right))
        } else {
            ("--", String::new())
        };
        // Label sits on the midpoint of the centers, over a background patch
        let weight = edge
            .weight_label()
            .map(|w| format!(" w={} at {} on {}", w, from.midpoint(&to), self.background))
            .unwrap_or_default();
        self.line(format_args!(
            "edge   {:>3} {} {} {} {}{}{} ({})",
            edge.id.index(),
            color,
            start,
            arrow,
            end,
            barbs,
            weight,
            edge.state
        ));
    }

    fn clear(&mut self) {
        let background = self.background;
        self.line(format_args!("clear {}", background));
    }
}
