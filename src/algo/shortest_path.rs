//! Single-source shortest path (Dijkstra)
//!
//! Every vertex is eventually selected, unreachable ones last with an
//! infinite label, so the run covers the whole graph like the other
//! traversals. Ties on the minimum label go to the lowest vertex id.

use super::common::{require_vertex, Algorithm, EngineResult, Traversal};
use crate::graph::{Annotation, Distance, EdgeId, EdgeState, Graph, GraphResult, VertexId, VisualEvent};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// How the next vertex to settle is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrontierStrategy {
    /// Scan every unsettled vertex, O(V^2 + E) overall
    #[default]
    LinearScan,
    /// Min-heap keyed by (label, id) with lazy deletion
    BinaryHeap,
}

/// Which edges end up labelled `Relaxed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RelaxationLabels {
    /// Every edge that improved a label at least once
    #[default]
    EveryImprovement,
    /// Only the edges of the final shortest-path tree; a relaxation replaced
    /// by a cheaper path is withdrawn
    ShortestPathTree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortestPathOptions {
    pub frontier: FrontierStrategy,
    pub labels: RelaxationLabels,
}

#[derive(Debug, Clone)]
enum Frontier {
    LinearScan,
    Heap(BinaryHeap<Reverse<(Distance, VertexId)>>),
}

impl Frontier {
    fn new(strategy: FrontierStrategy, distances: &[Distance]) -> Self {
        match strategy {
            FrontierStrategy::LinearScan => Frontier::LinearScan,
            FrontierStrategy::BinaryHeap => Frontier::Heap(
                distances
                    .iter()
                    .enumerate()
                    .map(|(i, &d)| Reverse((d, VertexId::new(i))))
                    .collect(),
            ),
        }
    }

    fn update(&mut self, vertex: VertexId, distance: Distance) {
        if let Frontier::Heap(heap) = self {
            heap.push(Reverse((distance, vertex)));
        }
    }

    /// Unexplored vertex with the smallest label, lowest id among ties
    fn pop_min(&mut self, graph: &Graph, distances: &[Distance]) -> Option<VertexId> {
        match self {
            Frontier::LinearScan => {
                let mut best: Option<(Distance, VertexId)> = None;
                for vertex in graph.vertices().iter().filter(|v| !v.is_explored()) {
                    let d = distances[vertex.id.index()];
                    // Strict comparison keeps the earliest vertex on ties
                    if best.map_or(true, |(bd, _)| d < bd) {
                        best = Some((d, vertex.id));
                    }
                }
                best.map(|(_, v)| v)
            }
            Frontier::Heap(heap) => {
                while let Some(Reverse((d, vertex))) = heap.pop() {
                    let stale = d != distances[vertex.index()]
                        || graph.vertex(vertex).map_or(true, |v| v.is_explored());
                    if !stale {
                        return Some(vertex);
                    }
                }
                None
            }
        }
    }
}

/// Step machine for Dijkstra's algorithm from a start vertex
#[derive(Debug, Clone)]
pub struct ShortestPath {
    start: VertexId,
    distances: Vec<Distance>,
    /// Edge that produced each current label
    parents: Vec<Option<EdgeId>>,
    labels: RelaxationLabels,
    frontier: Frontier,
    /// Settled vertex whose edges are being relaxed, and the next edge position
    relaxing: Option<(VertexId, usize)>,
    /// Events whose mutations are already applied
    queued: VecDeque<VisualEvent>,
}

impl ShortestPath {
    pub fn new(graph: &Graph, start: VertexId) -> EngineResult<Self> {
        Self::with_options(graph, start, ShortestPathOptions::default())
    }

    pub fn with_options(graph: &Graph, start: VertexId, options: ShortestPathOptions) -> EngineResult<Self> {
        require_vertex(graph, start)?;
        let mut distances = vec![Distance::Infinite; graph.vertex_count()];
        distances[start.index()] = Distance::Finite(0);
        Ok(ShortestPath {
            start,
            frontier: Frontier::new(options.frontier, &distances),
            parents: vec![None; graph.vertex_count()],
            labels: options.labels,
            distances,
            relaxing: None,
            queued: VecDeque::new(),
        })
    }

    /// Current distance labels, indexed by vertex id
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances.get(vertex.index()).copied()
    }

    /// Edge through which `vertex` got its current label
    pub fn parent_edge(&self, vertex: VertexId) -> Option<EdgeId> {
        self.parents.get(vertex.index()).copied().flatten()
    }

    /// Give vertices inserted since construction an infinite label
    fn track_new_vertices(&mut self, graph: &Graph) {
        for index in self.distances.len()..graph.vertex_count() {
            self.distances.push(Distance::Infinite);
            self.parents.push(None);
            self.frontier.update(VertexId::new(index), Distance::Infinite);
        }
    }

    /// Look at the edge under the cursor of the settled vertex `u`
    fn relax(&mut self, graph: &mut Graph, u: VertexId, edge_index: usize) -> GraphResult<bool> {
        let Some(&edge) = graph.outgoing(u)?.get(edge_index) else {
            return Ok(false);
        };
        let z = graph.opposite(edge, u)?;
        let weight = graph.edge(edge).map_or(0, |e| e.weight);

        if graph.edge_state(edge)? != EdgeState::Relaxed {
            self.queued.push_back(VisualEvent::EdgeExamined { edge });
        }

        let candidate = self.distances[u.index()].extend(weight);
        if candidate < self.distances[z.index()] {
            self.distances[z.index()] = candidate;
            graph.classify_edge(edge, EdgeState::Relaxed)?;
            self.frontier.update(z, candidate);
            self.queued.push_back(VisualEvent::EdgeClassified {
                edge,
                state: EdgeState::Relaxed,
            });
            let replaced = self.parents[z.index()].replace(edge);
            if self.labels == RelaxationLabels::ShortestPathTree {
                if let Some(old) = replaced.filter(|&old| old != edge) {
                    graph.withdraw_relaxation(old)?;
                    self.queued.push_back(VisualEvent::EdgeClassified {
                        edge: old,
                        state: EdgeState::Unexplored,
                    });
                }
            }
            self.queued.push_back(VisualEvent::DistanceImproved {
                vertex: z,
                distance: candidate,
            });
            self.queued.push_back(VisualEvent::VertexRestored {
                vertex: z,
                annotation: Annotation::Distance(candidate),
            });
        }
        Ok(true)
    }
}

impl Traversal for ShortestPath {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ShortestPath
    }

    fn start(&self) -> VertexId {
        self.start
    }

    fn prelude(&self, graph: &Graph) -> Vec<VisualEvent> {
        graph
            .vertices()
            .iter()
            .map(|v| VisualEvent::VertexAnnotated {
                vertex: v.id,
                annotation: Annotation::Distance(self.distance(v.id).unwrap_or(Distance::Infinite)),
            })
            .collect()
    }

    fn step(&mut self, graph: &mut Graph) -> GraphResult<Option<VisualEvent>> {
        self.track_new_vertices(graph);
        loop {
            if let Some(event) = self.queued.pop_front() {
                return Ok(Some(event));
            }

            if let Some((u, edge_index)) = self.relaxing {
                if self.relax(graph, u, edge_index)? {
                    self.relaxing = Some((u, edge_index + 1));
                } else {
                    self.relaxing = None;
                }
                continue;
            }

            let Some(u) = self.frontier.pop_min(graph, &self.distances) else {
                return Ok(None);
            };
            graph.mark_explored(u)?;
            self.relaxing = Some((u, 0));
            return Ok(Some(VisualEvent::VertexExplored {
                vertex: u,
                annotation: Some(Annotation::Distance(self.distances[u.index()])),
            }));
        }
    }

    fn annotations(&self) -> Vec<Option<Annotation>> {
        self.distances.iter().map(|&d| Some(Annotation::Distance(d))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::common::drain;
    use crate::graph::Position;

    fn vertices(n: usize) -> Graph {
        let mut graph = Graph::new();
        for i in 0..n {
            graph.insert_vertex(Position::new(i as f64 * 100.0, 0.0));
        }
        graph
    }

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn test_directed_triangle() {
        let mut graph = vertices(3);
        let e01 = graph.insert_edge(v(0), v(1), 1, true).unwrap();
        let e12 = graph.insert_edge(v(1), v(2), 2, true).unwrap();
        let e02 = graph.insert_edge(v(0), v(2), 5, true).unwrap();

        for frontier in [FrontierStrategy::LinearScan, FrontierStrategy::BinaryHeap] {
            graph.reset();
            let options = ShortestPathOptions { frontier, ..Default::default() };
            let mut sp = ShortestPath::with_options(&graph, v(0), options).unwrap();
            drain(&mut graph, &mut sp).unwrap();

            assert_eq!(
                sp.distances(),
                &[Distance::Finite(0), Distance::Finite(1), Distance::Finite(3)]
            );
            assert_eq!(graph.edge_state(e01), Ok(EdgeState::Relaxed));
            assert_eq!(graph.edge_state(e12), Ok(EdgeState::Relaxed));
            // Settling 0 lowers the label of 2 from infinity to 5 through 0 -> 2
            assert_eq!(graph.edge_state(e02), Ok(EdgeState::Relaxed));
            assert_eq!(sp.parent_edge(v(2)), Some(e12));
        }
    }

    #[test]
    fn test_directed_triangle_tree_labels() {
        let mut graph = vertices(3);
        let e01 = graph.insert_edge(v(0), v(1), 1, true).unwrap();
        let e12 = graph.insert_edge(v(1), v(2), 2, true).unwrap();
        let e02 = graph.insert_edge(v(0), v(2), 5, true).unwrap();

        let options = ShortestPathOptions {
            labels: RelaxationLabels::ShortestPathTree,
            ..Default::default()
        };
        let mut sp = ShortestPath::with_options(&graph, v(0), options).unwrap();
        let events = drain(&mut graph, &mut sp).unwrap();

        assert_eq!(
            sp.distances(),
            &[Distance::Finite(0), Distance::Finite(1), Distance::Finite(3)]
        );
        assert_eq!(graph.edge_state(e01), Ok(EdgeState::Relaxed));
        assert_eq!(graph.edge_state(e12), Ok(EdgeState::Relaxed));
        // 0 -> 1 -> 2 is cheaper, so 0 -> 2 is withdrawn from the tree
        assert_eq!(graph.edge_state(e02), Ok(EdgeState::Unexplored));
        assert!(events.contains(&VisualEvent::EdgeClassified { edge: e02, state: EdgeState::Unexplored }));
    }

    #[test]
    fn test_edge_never_relaxed_stays_unexplored() {
        let mut graph = vertices(3);
        let e01 = graph.insert_edge(v(0), v(1), 1, true).unwrap();
        let e12 = graph.insert_edge(v(1), v(2), 2, true).unwrap();
        let e20 = graph.insert_edge(v(2), v(0), 5, true).unwrap();

        let mut sp = ShortestPath::new(&graph, v(0)).unwrap();
        drain(&mut graph, &mut sp).unwrap();

        assert_eq!(sp.distance(v(2)), Some(Distance::Finite(3)));
        assert_eq!(graph.edge_state(e01), Ok(EdgeState::Relaxed));
        assert_eq!(graph.edge_state(e12), Ok(EdgeState::Relaxed));
        assert_eq!(graph.edge_state(e20), Ok(EdgeState::Unexplored));
    }

    #[test]
    fn test_unreachable_vertices_keep_infinite_label() {
        let mut graph = vertices(3);
        graph.insert_edge(v(1), v(0), 4, true).unwrap();

        let mut sp = ShortestPath::new(&graph, v(0)).unwrap();
        let events = drain(&mut graph, &mut sp).unwrap();

        assert!(graph.vertices().iter().all(|vx| vx.is_explored()));
        assert_eq!(
            sp.distances(),
            &[Distance::Finite(0), Distance::Infinite, Distance::Infinite]
        );
        // Unreachable vertices are settled in id order after the reachable ones
        let settled: Vec<VertexId> = events
            .iter()
            .filter_map(|e| match e {
                VisualEvent::VertexExplored { vertex, .. } => Some(*vertex),
                _ => None,
            })
            .collect();
        assert_eq!(settled, vec![v(0), v(1), v(2)]);
    }

    #[test]
    fn test_ties_go_to_lowest_id() {
        let mut graph = vertices(4);
        graph.insert_edge(v(0), v(3), 2, false).unwrap();
        graph.insert_edge(v(0), v(1), 2, false).unwrap();
        graph.insert_edge(v(0), v(2), 2, false).unwrap();

        for frontier in [FrontierStrategy::LinearScan, FrontierStrategy::BinaryHeap] {
            graph.reset();
            let options = ShortestPathOptions { frontier, ..Default::default() };
            let mut sp = ShortestPath::with_options(&graph, v(0), options).unwrap();
            let events = drain(&mut graph, &mut sp).unwrap();
            let settled: Vec<VertexId> = events
                .iter()
                .filter_map(|e| match e {
                    VisualEvent::VertexExplored { vertex, .. } => Some(*vertex),
                    _ => None,
                })
                .collect();
            assert_eq!(settled, vec![v(0), v(1), v(2), v(3)]);
        }
    }

    #[test]
    fn test_relaxation_event_sequence() {
        let mut graph = vertices(2);
        let e = graph.insert_edge(v(0), v(1), 7, false).unwrap();

        let mut sp = ShortestPath::new(&graph, v(0)).unwrap();
        let events = drain(&mut graph, &mut sp).unwrap();

        let d0 = Annotation::Distance(Distance::Finite(0));
        let d7 = Annotation::Distance(Distance::Finite(7));
        assert_eq!(
            events,
            vec![
                VisualEvent::VertexAnnotated { vertex: v(0), annotation: d0 },
                VisualEvent::VertexAnnotated { vertex: v(1), annotation: Annotation::Distance(Distance::Infinite) },
                VisualEvent::VertexExplored { vertex: v(0), annotation: Some(d0) },
                VisualEvent::EdgeExamined { edge: e },
                VisualEvent::EdgeClassified { edge: e, state: EdgeState::Relaxed },
                VisualEvent::DistanceImproved { vertex: v(1), distance: Distance::Finite(7) },
                VisualEvent::VertexRestored { vertex: v(1), annotation: d7 },
                VisualEvent::VertexExplored { vertex: v(1), annotation: Some(d7) },
            ]
        );
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph = vertices(3);
        graph.insert_edge(v(0), v(1), 0, false).unwrap();
        graph.insert_edge(v(1), v(2), 0, false).unwrap();

        let mut sp = ShortestPath::new(&graph, v(2)).unwrap();
        drain(&mut graph, &mut sp).unwrap();

        assert_eq!(sp.distances(), &[Distance::Finite(0); 3]);
    }

    #[test]
    fn test_vertex_inserted_after_construction() {
        for frontier in [FrontierStrategy::LinearScan, FrontierStrategy::BinaryHeap] {
            let mut graph = vertices(1);
            let options = ShortestPathOptions { frontier, ..Default::default() };
            let mut sp = ShortestPath::with_options(&graph, v(0), options).unwrap();

            let late = graph.insert_vertex(Position::new(500.0, 500.0));
            graph.insert_edge(v(0), late, 3, false).unwrap();

            let events = drain(&mut graph, &mut sp).unwrap();
            assert!(events.contains(&VisualEvent::VertexAnnotated {
                vertex: late,
                annotation: Annotation::Distance(Distance::Infinite),
            }));
            assert_eq!(sp.distance(late), Some(Distance::Finite(3)));
            assert!(graph.vertices().iter().all(|vx| vx.is_explored()));
        }
    }
}
