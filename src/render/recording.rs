use super::{Color, RenderAdapter};
use crate::graph::{Edge, EdgeId, Position, Vertex, VertexId};
use serde::Serialize;

/// One draw call, as seen by a [`RecordingRenderer`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear,
    Vertex { vertex: VertexId, color: Color },
    Annotation { vertex: VertexId, text: String },
    Edge {
        edge: EdgeId,
        from: Position,
        to: Position,
        color: Color,
    },
}

/// Renderer that keeps every draw call in order
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Last color a vertex was drawn with
    pub fn vertex_color(&self, vertex: VertexId) -> Option<Color> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Vertex { vertex: v, color } if *v == vertex => Some(*color),
            _ => None,
        })
    }

    /// Last color an edge was drawn with
    pub fn edge_color(&self, edge: EdgeId) -> Option<Color> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Edge { edge: e, color, .. } if *e == edge => Some(*color),
            _ => None,
        })
    }

    /// Last annotation drawn under a vertex
    pub fn annotation(&self, vertex: VertexId) -> Option<&str> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Annotation { vertex: v, text } if *v == vertex => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderAdapter for RecordingRenderer {
    fn draw_vertex(&mut self, vertex: &Vertex, color: Color) {
        self.commands.push(DrawCommand::Vertex {
            vertex: vertex.id,
            color,
        });
    }

    fn draw_vertex_annotation(&mut self, vertex: &Vertex, text: &str) {
        self.commands.push(DrawCommand::Annotation {
            vertex: vertex.id,
            text: text.to_string(),
        });
    }

    fn draw_edge(&mut self, edge: &Edge, from: Position, to: Position, color: Color) {
        self.commands.push(DrawCommand::Edge {
            edge: edge.id,
            from,
            to,
            color,
        });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order_and_looks_up_latest() {
        let v = Vertex::new(VertexId::new(0), Position::new(10.0, 10.0));
        let mut renderer = RecordingRenderer::new();
        renderer.clear();
        renderer.draw_vertex(&v, Color::WHITE);
        renderer.draw_vertex(&v, Color::BLUE);
        renderer.draw_vertex_annotation(&v, "Level: 0");

        assert_eq!(renderer.commands().len(), 4);
        assert_eq!(renderer.commands()[0], DrawCommand::Clear);
        assert_eq!(renderer.vertex_color(v.id), Some(Color::BLUE));
        assert_eq!(renderer.annotation(v.id), Some("Level: 0"));
        assert_eq!(renderer.edge_color(EdgeId::new(0)), None);

        assert_eq!(renderer.take().len(), 4);
        assert!(renderer.commands().is_empty());
    }
}
