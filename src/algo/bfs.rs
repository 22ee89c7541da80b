//! Breadth-first search
//!
//! Level-synchronous: all vertices of level `i` are expanded before any of
//! level `i + 1`. Levels are reported as annotations and collected per run.

use super::common::{require_vertex, Algorithm, EngineResult, Roots, Traversal};
use crate::graph::{Annotation, EdgeState, Graph, GraphResult, VertexId, VisualEvent};
use std::collections::VecDeque;

/// Step machine for breadth-first search over the whole graph
#[derive(Debug, Clone)]
pub struct BreadthFirst {
    roots: Roots,
    /// Level of each vertex within its own component
    levels: Vec<Option<usize>>,
    current: Vec<VertexId>,
    next: Vec<VertexId>,
    level: usize,
    /// Position in `current`
    vertex_cursor: usize,
    /// Position in the edge list of `current[vertex_cursor]`
    edge_cursor: usize,
    /// Events whose mutations are already applied
    queued: VecDeque<VisualEvent>,
}

impl BreadthFirst {
    pub fn new(graph: &Graph, start: VertexId) -> EngineResult<Self> {
        require_vertex(graph, start)?;
        Ok(BreadthFirst {
            roots: Roots::new(start),
            levels: vec![None; graph.vertex_count()],
            current: Vec::new(),
            next: Vec::new(),
            level: 0,
            vertex_cursor: 0,
            edge_cursor: 0,
            queued: VecDeque::new(),
        })
    }

    /// Level of `vertex` in the current run, if it has been reached
    pub fn level(&self, vertex: VertexId) -> Option<usize> {
        self.levels.get(vertex.index()).copied().flatten()
    }

    fn discover(&mut self, graph: &mut Graph, vertex: VertexId, level: usize) -> GraphResult<VisualEvent> {
        graph.mark_explored(vertex)?;
        if self.levels.len() <= vertex.index() {
            self.levels.resize(vertex.index() + 1, None);
        }
        self.levels[vertex.index()] = Some(level);
        Ok(VisualEvent::VertexExplored {
            vertex,
            annotation: Some(Annotation::Level(level)),
        })
    }
}

impl Traversal for BreadthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
    }

    fn start(&self) -> VertexId {
        self.roots.origin()
    }

    fn step(&mut self, graph: &mut Graph) -> GraphResult<Option<VisualEvent>> {
        loop {
            if let Some(event) = self.queued.pop_front() {
                return Ok(Some(event));
            }

            if self.current.is_empty() {
                let Some(root) = self.roots.next(graph) else {
                    return Ok(None);
                };
                self.current.push(root);
                self.level = 0;
                self.vertex_cursor = 0;
                self.edge_cursor = 0;
                return self.discover(graph, root, 0).map(Some);
            }

            let Some(&vertex) = self.current.get(self.vertex_cursor) else {
                // Level exhausted; an empty next level ends this component
                self.current = std::mem::take(&mut self.next);
                self.level += 1;
                self.vertex_cursor = 0;
                self.edge_cursor = 0;
                continue;
            };

            let Some(&edge) = graph.outgoing(vertex)?.get(self.edge_cursor) else {
                self.vertex_cursor += 1;
                self.edge_cursor = 0;
                continue;
            };
            self.edge_cursor += 1;

            if !graph.edge_state(edge)?.is_unexplored() {
                continue;
            }

            let far = graph.opposite(edge, vertex)?;
            if graph.vertex_state(far)?.is_explored() {
                graph.classify_edge(edge, EdgeState::Cross)?;
                return Ok(Some(VisualEvent::EdgeClassified { edge, state: EdgeState::Cross }));
            }

            graph.classify_edge(edge, EdgeState::Discovery)?;
            let discovered = self.discover(graph, far, self.level + 1)?;
            self.next.push(far);
            self.queued.push_back(discovered);
            return Ok(Some(VisualEvent::EdgeClassified { edge, state: EdgeState::Discovery }));
        }
    }

    fn annotations(&self) -> Vec<Option<Annotation>> {
        self.levels.iter().map(|l| l.map(Annotation::Level)).collect()
    }
}
