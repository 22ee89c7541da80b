//! Animator session
//!
//! A session owns the editable graph, the running flag and the live step
//! delay. At most one run is in progress at a time, and the graph cannot be
//! edited while it is.

use crate::algo::{Algorithm, EngineResult, ShortestPathOptions};
use crate::config::AnimatorConfig;
use crate::graph::{EdgeId, Graph, GraphResult, Position, VertexId};
use crate::input::{CanvasInput, ClickOutcome};
use crate::render::{Palette, RenderAdapter};
use crate::scheduler::{RunReport, Scheduler, StepDelay};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Result of a run request
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(RunReport),
    /// Another run was already in progress; nothing happened
    Rejected,
}

/// Result of an edit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome<T> {
    Applied(T),
    /// A run is in progress; the graph was left untouched
    Rejected,
}

impl<T> EditOutcome<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            EditOutcome::Applied(value) => Some(value),
            EditOutcome::Rejected => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, EditOutcome::Rejected)
    }
}

/// Clears the running flag when dropped, also on early error returns
struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunGuard(flag))
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct Session {
    graph: Mutex<Graph>,
    running: AtomicBool,
    delay: StepDelay,
    palette: Palette,
    shortest_path: ShortestPathOptions,
}

impl Session {
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, &AnimatorConfig::default())
    }

    pub fn with_config(graph: Graph, config: &AnimatorConfig) -> Self {
        Session {
            graph: Mutex::new(graph),
            running: AtomicBool::new(false),
            delay: config.step_delay(),
            palette: config.palette,
            shortest_path: config.shortest_path,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Handle to the live step delay
    pub fn step_delay(&self) -> StepDelay {
        self.delay.clone()
    }

    /// Change the pause between steps; an ongoing run picks it up at its next step
    pub fn set_step_delay(&self, delay: Duration) {
        self.delay.set(delay);
    }

    /// Animate `algorithm` from `start` on `renderer`
    ///
    /// Returns [`RunOutcome::Rejected`] without touching the graph when a run
    /// is already in progress.
    pub async fn run<R: RenderAdapter>(
        &self,
        algorithm: Algorithm,
        start: VertexId,
        renderer: R,
    ) -> EngineResult<RunOutcome> {
        let Some(_guard) = RunGuard::acquire(&self.running) else {
            warn!("Rejected {} from {}: a run is in progress", algorithm, start);
            return Ok(RunOutcome::Rejected);
        };

        let mut graph = self.graph.lock().await;
        let mut scheduler = Scheduler::new(renderer, self.delay.clone()).with_palette(self.palette);
        let report = scheduler
            .run(&mut graph, algorithm, start, self.shortest_path)
            .await?;
        Ok(RunOutcome::Completed(report))
    }

    /// Edit the graph unless a run holds it
    fn edit<T>(&self, f: impl FnOnce(&mut Graph) -> T) -> EditOutcome<T> {
        if self.is_running() {
            return EditOutcome::Rejected;
        }
        match self.graph.try_lock() {
            Ok(mut graph) => EditOutcome::Applied(f(&mut graph)),
            Err(_) => EditOutcome::Rejected,
        }
    }

    pub fn insert_vertex(&self, position: Position) -> EditOutcome<VertexId> {
        self.edit(|graph| graph.insert_vertex(position))
    }

    pub fn insert_edge(
        &self,
        vertex0: VertexId,
        vertex1: VertexId,
        weight: i64,
        directed: bool,
    ) -> GraphResult<EditOutcome<EdgeId>> {
        match self.edit(|graph| graph.insert_edge(vertex0, vertex1, weight, directed)) {
            EditOutcome::Applied(result) => result.map(EditOutcome::Applied),
            EditOutcome::Rejected => Ok(EditOutcome::Rejected),
        }
    }

    /// Apply a canvas click; clicks during a run are dropped
    pub fn click(&self, input: &mut CanvasInput, point: Position) -> EditOutcome<ClickOutcome> {
        self.edit(|graph| input.click(graph, point))
    }

    /// Swap in a whole new graph, e.g. a randomly generated one
    pub fn replace_graph(&self, graph: Graph) -> EditOutcome<()> {
        let outcome = self.edit(|current| *current = graph);
        if !outcome.is_rejected() {
            info!("Replaced graph");
        }
        outcome
    }

    /// Drop every vertex and edge; ids restart at 0
    pub fn clear(&self) -> EditOutcome<()> {
        self.replace_graph(Graph::new())
    }

    /// Copy of the graph, waiting for any run to finish
    pub async fn snapshot(&self) -> Graph {
        self.graph.lock().await.clone()
    }

    /// Copy of the graph, or `None` while a run holds it
    pub fn try_snapshot(&self) -> Option<Graph> {
        self.graph.try_lock().ok().map(|graph| graph.clone())
    }
}
