//! Rendering boundary
//!
//! The engine never draws directly. The scheduler translates visual events
//! into calls on a [`RenderAdapter`], which a canvas, a terminal or a test
//! recorder can implement.

pub mod color;
pub mod geometry;
pub mod recording;
pub mod text;

pub use color::{Color, Palette};
pub use recording::{DrawCommand, RecordingRenderer};
pub use text::TextRenderer;

use crate::graph::{Edge, Position, Vertex};

/// Drawing surface consumed by the scheduler
pub trait RenderAdapter {
    /// Draw a labelled vertex circle in `color`
    fn draw_vertex(&mut self, vertex: &Vertex, color: Color);

    /// Draw text under a vertex
    fn draw_vertex_annotation(&mut self, vertex: &Vertex, text: &str);

    /// Draw an edge between the given endpoint centers, with an arrowhead when
    /// directed and a weight label when the weight is not zero
    fn draw_edge(&mut self, edge: &Edge, from: Position, to: Position, color: Color);

    /// Wipe the surface
    fn clear(&mut self);
}

impl<R: RenderAdapter + ?Sized> RenderAdapter for &mut R {
    fn draw_vertex(&mut self, vertex: &Vertex, color: Color) {
        (**self).draw_vertex(vertex, color)
    }

    fn draw_vertex_annotation(&mut self, vertex: &Vertex, text: &str) {
        (**self).draw_vertex_annotation(vertex, text)
    }

    fn draw_edge(&mut self, edge: &Edge, from: Position, to: Position, color: Color) {
        (**self).draw_edge(edge, from, to, color)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
