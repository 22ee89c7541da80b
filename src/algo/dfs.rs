//! Depth-first search
//!
//! The recursion of the textbook algorithm is kept as an explicit stack of
//! frames, each remembering how far it got through its vertex's edge list.
//! This yields the same edge classifications in the same order as the
//! recursive form while letting the scheduler pause between any two events.

use super::common::{require_vertex, Algorithm, EngineResult, Roots, Traversal};
use crate::graph::{EdgeState, Graph, GraphResult, VertexId, VisualEvent};

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    cursor: usize,
}

/// Step machine for depth-first search over the whole graph
#[derive(Debug, Clone)]
pub struct DepthFirst {
    roots: Roots,
    stack: Vec<Frame>,
    /// Vertex reached through a discovery edge, entered on the next step
    descend_into: Option<VertexId>,
}

impl DepthFirst {
    pub fn new(graph: &Graph, start: VertexId) -> EngineResult<Self> {
        require_vertex(graph, start)?;
        Ok(DepthFirst {
            roots: Roots::new(start),
            stack: Vec::new(),
            descend_into: None,
        })
    }

    fn enter(&mut self, graph: &mut Graph, vertex: VertexId) -> GraphResult<VisualEvent> {
        graph.mark_explored(vertex)?;
        self.stack.push(Frame { vertex, cursor: 0 });
        Ok(VisualEvent::VertexExplored {
            vertex,
            annotation: None,
        })
    }
}

impl Traversal for DepthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DepthFirst
    }

    fn start(&self) -> VertexId {
        self.roots.origin()
    }

    fn step(&mut self, graph: &mut Graph) -> GraphResult<Option<VisualEvent>> {
        if let Some(vertex) = self.descend_into.take() {
            return self.enter(graph, vertex).map(Some);
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                // Current tree finished; start the next one
                return match self.roots.next(graph) {
                    Some(root) => self.enter(graph, root).map(Some),
                    None => Ok(None),
                };
            };

            let vertex = frame.vertex;
            let Some(&edge) = graph.outgoing(vertex)?.get(frame.cursor) else {
                self.stack.pop();
                continue;
            };
            frame.cursor += 1;

            if !graph.edge_state(edge)?.is_unexplored() {
                continue;
            }

            let far = graph.opposite(edge, vertex)?;
            let state = if graph.vertex_state(far)?.is_explored() {
                EdgeState::Back
            } else {
                self.descend_into = Some(far);
                EdgeState::Discovery
            };
            graph.classify_edge(edge, state)?;
            return Ok(Some(VisualEvent::EdgeClassified { edge, state }));
        }
    }
}

/// Reference recursive form, used to check the step machine
#[cfg(test)]
pub(crate) fn recursive_dfs(graph: &mut Graph, start: VertexId) -> GraphResult<Vec<VisualEvent>> {
    fn visit(graph: &mut Graph, v: VertexId, events: &mut Vec<VisualEvent>) -> GraphResult<()> {
        graph.mark_explored(v)?;
        events.push(VisualEvent::VertexExplored { vertex: v, annotation: None });
        let edges = graph.outgoing(v)?.to_vec();
        for edge in edges {
            if graph.edge_state(edge)?.is_unexplored() {
                let w = graph.opposite(edge, v)?;
                if graph.vertex_state(w)?.is_explored() {
                    graph.classify_edge(edge, EdgeState::Back)?;
                    events.push(VisualEvent::EdgeClassified { edge, state: EdgeState::Back });
                } else {
                    graph.classify_edge(edge, EdgeState::Discovery)?;
                    events.push(VisualEvent::EdgeClassified { edge, state: EdgeState::Discovery });
                    visit(graph, w, events)?;
                }
            }
        }
        Ok(())
    }

    let mut events = Vec::new();
    visit(graph, start, &mut events)?;
    while let Some(v) = graph.next_unexplored(0) {
        visit(graph, v, &mut events)?;
    }
    Ok(events)
}
