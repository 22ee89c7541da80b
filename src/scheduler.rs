//! Paced playback of traversals
//!
//! The scheduler pulls one visual event at a time from a [`Traversal`],
//! draws it and then suspends for the current step delay. Stepping and
//! drawing strictly alternate on a single task.

use crate::algo::{
    traversal_for, Algorithm, BreadthFirst, DepthFirst, EngineResult, ShortestPath,
    ShortestPathOptions, Traversal,
};
use crate::graph::{
    Annotation, EdgeState, Graph, GraphError, GraphResult, Vertex, VertexId, VisualEvent,
};
use crate::render::{Palette, RenderAdapter};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default pause between two visual events
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(500);

/// Shared, live-adjustable pause between two visual events
///
/// Clones share the same value; a change is picked up at the next suspend.
#[derive(Debug, Clone)]
pub struct StepDelay(Arc<AtomicU64>);

impl StepDelay {
    pub fn new(delay: Duration) -> Self {
        StepDelay(Arc::new(AtomicU64::new(millis(delay))))
    }

    pub fn from_millis(ms: u64) -> Self {
        StepDelay(Arc::new(AtomicU64::new(ms)))
    }

    pub fn get(&self) -> Duration {
        Duration::from_millis(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, delay: Duration) {
        self.0.store(millis(delay), Ordering::Relaxed);
    }
}

impl Default for StepDelay {
    fn default() -> Self {
        StepDelay::new(DEFAULT_STEP_DELAY)
    }
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub start: VertexId,
    /// Number of paced events, the prelude excluded
    pub steps: usize,
    /// Final annotation per vertex, indexed by vertex id
    pub annotations: Vec<Option<Annotation>>,
    /// Final classification per edge, indexed by edge id
    pub edge_states: Vec<EdgeState>,
}

impl RunReport {
    pub fn count_edges(&self, state: EdgeState) -> usize {
        self.edge_states.iter().filter(|s| **s == state).count()
    }
}

/// Applies visual events to a renderer, one per step delay
pub struct Scheduler<R: RenderAdapter> {
    renderer: R,
    delay: StepDelay,
    palette: Palette,
}

impl<R: RenderAdapter> Scheduler<R> {
    pub fn new(renderer: R, delay: StepDelay) -> Self {
        Scheduler {
            renderer,
            delay,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn delay(&self) -> &StepDelay {
        &self.delay
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Reset the graph and animate a depth-first search from `start`
    pub async fn run_dfs(&mut self, graph: &mut Graph, start: VertexId) -> EngineResult<RunReport> {
        graph.reset();
        let mut traversal = DepthFirst::new(graph, start)?;
        Ok(self.play(graph, &mut traversal).await?)
    }

    /// Reset the graph and animate a breadth-first search from `start`
    pub async fn run_bfs(&mut self, graph: &mut Graph, start: VertexId) -> EngineResult<RunReport> {
        graph.reset();
        let mut traversal = BreadthFirst::new(graph, start)?;
        Ok(self.play(graph, &mut traversal).await?)
    }

    /// Reset the graph and animate Dijkstra's shortest paths from `start`
    pub async fn run_shortest_path(
        &mut self,
        graph: &mut Graph,
        start: VertexId,
        options: ShortestPathOptions,
    ) -> EngineResult<RunReport> {
        graph.reset();
        let mut traversal = ShortestPath::with_options(graph, start, options)?;
        Ok(self.play(graph, &mut traversal).await?)
    }

    /// Reset the graph and animate `algorithm` from `start`
    pub async fn run(
        &mut self,
        graph: &mut Graph,
        algorithm: Algorithm,
        start: VertexId,
        options: ShortestPathOptions,
    ) -> EngineResult<RunReport> {
        graph.reset();
        let mut traversal = traversal_for(algorithm, graph, start, options)?;
        Ok(self.play(graph, traversal.as_mut()).await?)
    }

    /// Animate `traversal` to completion on an already reset graph
    pub async fn play<T: Traversal + ?Sized>(
        &mut self,
        graph: &mut Graph,
        traversal: &mut T,
    ) -> GraphResult<RunReport> {
        let algorithm = traversal.algorithm();
        info!(
            "Starting {} from {} on {} vertices and {} edges",
            algorithm,
            traversal.start(),
            graph.vertex_count(),
            graph.edge_count()
        );

        self.renderer.clear();
        self.redraw(graph)?;
        for event in traversal.prelude(graph) {
            self.apply(graph, &event)?;
        }

        let mut steps = 0;
        while let Some(event) = traversal.step(graph)? {
            debug!("Step {}: {:?}", steps, event);
            self.apply(graph, &event)?;
            steps += 1;

            let delay = self.delay.get();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        info!("Finished {} after {} steps", algorithm, steps);
        Ok(RunReport {
            algorithm,
            start: traversal.start(),
            steps,
            annotations: traversal.annotations(),
            edge_states: graph.edges().iter().map(|e| e.state).collect(),
        })
    }

    /// Draw every edge, then every vertex on top, in its current colors
    pub fn redraw(&mut self, graph: &Graph) -> GraphResult<()> {
        for edge in graph.edges() {
            let (from, to) = graph.endpoints(edge.id)?;
            self.renderer
                .draw_edge(edge, from, to, self.palette.edge(edge.state));
        }
        for vertex in graph.vertices() {
            self.renderer.draw_vertex(vertex, self.vertex_color(vertex));
        }
        Ok(())
    }

    /// Translate one visual event into draw calls
    pub fn apply(&mut self, graph: &Graph, event: &VisualEvent) -> GraphResult<()> {
        match event {
            VisualEvent::VertexExplored { vertex, annotation } => {
                let vertex = lookup(graph, *vertex)?;
                self.renderer.draw_vertex(vertex, self.palette.explored);
                if let Some(annotation) = annotation {
                    self.renderer
                        .draw_vertex_annotation(vertex, &annotation.to_string());
                }
            }
            VisualEvent::VertexAnnotated { vertex, annotation } => {
                let vertex = lookup(graph, *vertex)?;
                self.renderer
                    .draw_vertex_annotation(vertex, &annotation.to_string());
            }
            VisualEvent::EdgeClassified { edge, state } => {
                let (from, to) = graph.endpoints(*edge)?;
                let edge = graph.edge(*edge).ok_or(GraphError::EdgeNotFound(*edge))?;
                self.renderer
                    .draw_edge(edge, from, to, self.palette.edge(*state));
            }
            VisualEvent::EdgeExamined { edge } => {
                let (from, to) = graph.endpoints(*edge)?;
                let edge = graph.edge(*edge).ok_or(GraphError::EdgeNotFound(*edge))?;
                self.renderer
                    .draw_edge(edge, from, to, self.palette.secondary);
            }
            VisualEvent::DistanceImproved { vertex, distance } => {
                let vertex = lookup(graph, *vertex)?;
                self.renderer.draw_vertex(vertex, self.palette.highlight);
                self.renderer.draw_vertex_annotation(
                    vertex,
                    &Annotation::Distance(*distance).to_string(),
                );
            }
            VisualEvent::VertexRestored { vertex, annotation } => {
                let vertex = lookup(graph, *vertex)?;
                self.renderer.draw_vertex(vertex, self.vertex_color(vertex));
                self.renderer
                    .draw_vertex_annotation(vertex, &annotation.to_string());
            }
        }
        Ok(())
    }

    fn vertex_color(&self, vertex: &Vertex) -> crate::render::Color {
        if vertex.is_explored() {
            self.palette.explored
        } else {
            self.palette.neutral
        }
    }
}

fn lookup(graph: &Graph, id: VertexId) -> GraphResult<&Vertex> {
    graph.vertex(id).ok_or(GraphError::VertexNotFound(id))
}
