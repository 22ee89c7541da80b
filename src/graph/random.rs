//! Random graph generation
//!
//! Vertices are scattered over the canvas without crowding each other, then
//! joined by distinct edges with random weights and directions.

use super::store::Graph;
use super::types::{Bounds, Position, VertexId};
use crate::render::geometry::{is_near_vertex, is_on_vertex};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Settings for [`create_randomized_graph`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomGraphConfig {
    /// Minimum number of vertices (inclusive)
    pub min_vertices: usize,
    /// Maximum number of vertices (inclusive)
    pub max_vertices: usize,
    /// Canvas the vertices are placed on
    pub bounds: Bounds,
    /// Distance kept free along every canvas border
    pub margin: f64,
    /// Vertex radius used for spacing checks
    pub radius: f64,
    /// Largest edge weight (inclusive)
    pub max_weight: u64,
    /// Placement tries per vertex before the vertex is dropped
    pub max_placement_attempts: usize,
    /// Endpoint draws per edge before edge generation stops
    pub max_edge_attempts: usize,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            min_vertices: 5,
            max_vertices: 15,
            bounds: Bounds::default(),
            margin: 80.0,
            radius: 40.0,
            max_weight: 20,
            max_placement_attempts: 1_000,
            max_edge_attempts: 1_000,
        }
    }
}

/// Range of edge counts for a graph with `n` vertices: `[n/2, n(n-1)/4]`,
/// widened when empty and capped at the number of distinct vertex pairs
pub fn edge_count_range(n: usize) -> (usize, usize) {
    let pairs = n * n.saturating_sub(1) / 2;
    let lower = (n / 2).min(pairs);
    let upper = (n * n.saturating_sub(1) / 4).max(lower).min(pairs);
    (lower, upper)
}

/// Build a new random graph
///
/// Placement and edge selection use rejection sampling with a bounded number
/// of attempts. A vertex that cannot be placed is dropped, and edge generation
/// stops early when no new pair turns up, so the spacing and uniqueness
/// guarantees always hold even if the requested counts are not reached.
pub fn create_randomized_graph<R: Rng + ?Sized>(config: &RandomGraphConfig, rng: &mut R) -> Graph {
    let mut graph = Graph::new();

    let min = config.min_vertices.min(config.max_vertices);
    let requested_vertices = rng.gen_range(min..=config.max_vertices.max(min));

    for _ in 0..requested_vertices {
        match place_vertex(&graph, config, rng) {
            Some(position) => {
                graph.insert_vertex(position);
            }
            None => {
                warn!(
                    "Could not place vertex {} after {} attempts; canvas is too crowded",
                    graph.vertex_count(),
                    config.max_placement_attempts
                );
                break;
            }
        }
    }

    let n = graph.vertex_count();
    let (lower, upper) = edge_count_range(n);
    let requested_edges = if upper > lower { rng.gen_range(lower..=upper) } else { lower };
    // Edge weights are i64 on insertion
    let max_weight = i64::try_from(config.max_weight).unwrap_or(i64::MAX);

    for _ in 0..requested_edges {
        let Some((a, b)) = pick_new_pair(&graph, config, rng) else {
            warn!(
                "Stopped edge generation at {} of {} edges after {} attempts",
                graph.edge_count(),
                requested_edges,
                config.max_edge_attempts
            );
            break;
        };
        let weight = rng.gen_range(0..=max_weight);
        let directed = rng.gen_bool(0.5);
        // Both endpoints exist and differ, so insertion cannot fail
        if let Err(e) = graph.insert_edge(a, b, weight, directed) {
            warn!("Skipping random edge {} -> {}: {}", a, b, e);
        }
    }

    debug!(
        "Generated random graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    graph
}

fn place_vertex<R: Rng + ?Sized>(graph: &Graph, config: &RandomGraphConfig, rng: &mut R) -> Option<Position> {
    for _ in 0..config.max_placement_attempts {
        let candidate = Position::new(
            sample_axis(rng, config.bounds.width, config.margin),
            sample_axis(rng, config.bounds.height, config.margin),
        );
        let crowded = graph.vertices().iter().any(|v| {
            is_near_vertex(candidate, v.position, config.radius)
                || is_on_vertex(candidate, v.position, config.radius)
        });
        if !crowded {
            return Some(candidate);
        }
    }
    None
}

fn pick_new_pair<R: Rng + ?Sized>(
    graph: &Graph,
    config: &RandomGraphConfig,
    rng: &mut R,
) -> Option<(VertexId, VertexId)> {
    let n = graph.vertex_count();
    if n < 2 {
        return None;
    }
    for _ in 0..config.max_edge_attempts {
        let a = VertexId::new(rng.gen_range(0..n));
        let b = VertexId::new(rng.gen_range(0..n));
        if a != b && !graph.has_edge_between(a, b) {
            return Some((a, b));
        }
    }
    None
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, extent: f64, margin: f64) -> f64 {
    let lo = margin.min(extent / 2.0).max(0.0);
    let hi = (extent - margin).max(lo);
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_edge_count_range() {
        assert_eq!(edge_count_range(0), (0, 0));
        assert_eq!(edge_count_range(1), (0, 0));
        assert_eq!(edge_count_range(2), (1, 1));
        assert_eq!(edge_count_range(3), (1, 1));
        assert_eq!(edge_count_range(5), (2, 5));
        assert_eq!(edge_count_range(10), (5, 22));
    }

    #[test]
    fn test_vertex_count_within_range() {
        let config = RandomGraphConfig::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = create_randomized_graph(&config, &mut rng);
            assert!(graph.vertex_count() >= config.min_vertices);
            assert!(graph.vertex_count() <= config.max_vertices);
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let config = RandomGraphConfig::default();
        let a = create_randomized_graph(&config, &mut StdRng::seed_from_u64(7));
        let b = create_randomized_graph(&config, &mut StdRng::seed_from_u64(7));

        assert_eq!(a.vertex_count(), b.vertex_count());
        assert_eq!(a.edge_count(), b.edge_count());
        for (x, y) in a.edges().iter().zip(b.edges()) {
            assert_eq!((x.vertex0, x.vertex1, x.weight, x.directed), (y.vertex0, y.vertex1, y.weight, y.directed));
        }
    }

    #[test]
    fn test_weights_within_bound() {
        let config = RandomGraphConfig { max_weight: 3, ..Default::default() };
        let graph = create_randomized_graph(&config, &mut StdRng::seed_from_u64(11));
        assert!(graph.edges().iter().all(|e| e.weight <= 3));
    }

    #[test]
    fn test_huge_max_weight_does_not_wrap() {
        let config = RandomGraphConfig { max_weight: u64::MAX, ..Default::default() };
        let graph = create_randomized_graph(&config, &mut StdRng::seed_from_u64(1));

        assert!(graph.edge_count() > 0);
        assert!(graph
            .edges()
            .iter()
            .all(|e| e.weight > 0 && e.weight <= i64::MAX as u64));
    }

    #[test]
    fn test_tiny_canvas_drops_vertices_instead_of_hanging() {
        let config = RandomGraphConfig {
            min_vertices: 10,
            max_vertices: 10,
            bounds: Bounds::new(100.0, 100.0),
            margin: 10.0,
            max_placement_attempts: 50,
            ..Default::default()
        };
        let graph = create_randomized_graph(&config, &mut StdRng::seed_from_u64(3));

        // The 2 * radius box of the first vertex covers the whole usable area
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_positions_respect_margin() {
        let config = RandomGraphConfig::default();
        let graph = create_randomized_graph(&config, &mut StdRng::seed_from_u64(5));
        for v in graph.vertices() {
            assert!(v.position.x >= config.margin && v.position.x <= config.bounds.width - config.margin);
            assert!(v.position.y >= config.margin && v.position.y <= config.bounds.height - config.margin);
        }
    }
}
