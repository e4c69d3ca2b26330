use geo::{HaversineDistance, Point};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::types::{Edge, Node, NodeId};
use crate::graph::RoadGraph;
use crate::Result;

/// Spacing between grid intersections, in degrees
const GRID_STEP_DEG: f64 = 0.001;

/// Great-circle distance between two positions, in metres
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let p1 = Point::new(lon1, lat1);
    let p2 = Point::new(lon2, lat2);
    p1.haversine_distance(&p2)
}

/// Generates a synthetic city grid of `width * height` intersections anchored at
/// (`origin_lat`, `origin_lon`).
///
/// Adjacent intersections are joined by two-way streets weighted by their haversine
/// length times a per-direction congestion factor in [1.0, 1.5). Roughly one block
/// in ten also gets a one-way diagonal shortcut. Node ids start at 1, row by row.
pub fn generate_road_grid(
    width: usize,
    height: usize,
    origin_lat: f64,
    origin_lon: f64,
    seed: u64,
) -> Result<RoadGraph<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);

    let id_of = |x: usize, y: usize| -> NodeId { (y * width + x + 1) as NodeId };

    let mut nodes = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            nodes.push(Node::new(
                id_of(x, y),
                origin_lat + y as f64 * GRID_STEP_DEG,
                origin_lon + x as f64 * GRID_STEP_DEG,
            ));
        }
    }

    let position = |id: NodeId| -> (f64, f64) {
        let node = &nodes[(id - 1) as usize];
        (node.lat, node.lon)
    };

    let mut edges = Vec::new();
    let street = |edges: &mut Vec<Edge<f64>>, rng: &mut StdRng, a: NodeId, b: NodeId| {
        let (lat1, lon1) = position(a);
        let (lat2, lon2) = position(b);
        let length = haversine_meters(lat1, lon1, lat2, lon2);
        edges.push(Edge::new(a, b, length * rng.gen_range(1.0..1.5)));
        edges.push(Edge::new(b, a, length * rng.gen_range(1.0..1.5)));
    };

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                street(&mut edges, &mut rng, id_of(x, y), id_of(x + 1, y));
            }
            if y + 1 < height {
                street(&mut edges, &mut rng, id_of(x, y), id_of(x, y + 1));
            }
            if x + 1 < width && y + 1 < height && rng.gen_bool(0.1) {
                let (from, to) = (id_of(x, y), id_of(x + 1, y + 1));
                let (lat1, lon1) = position(from);
                let (lat2, lon2) = position(to);
                edges.push(Edge::new(from, to, haversine_meters(lat1, lon1, lat2, lon2)));
            }
        }
    }

    RoadGraph::build(nodes.iter().copied(), edges)
}

/// Generates a random directed graph on nodes `0..n`.
///
/// Every ordered pair `(u, v)` with `u != v` gets an edge with probability
/// `edge_probability`. Weights are drawn from a small integer range so that
/// equal-cost alternatives are common.
pub fn generate_random_graph(n: usize, edge_probability: f64, seed: u64) -> Result<RoadGraph<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);

    let nodes: Vec<Node> = (0..n)
        .map(|i| Node::new(i as NodeId, rng.gen_range(-60.0..60.0), rng.gen_range(-180.0..180.0)))
        .collect();

    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(0..20) as f64 * 0.5;
                edges.push(Edge::new(u as NodeId, v as NodeId, weight));
            }
        }
    }

    RoadGraph::build(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_haversine_one_millidegree_latitude() {
        let d = haversine_meters(50.0, 4.0, 50.001, 4.0);
        assert!((d - 111.2).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_road_grid_shape() {
        let graph = generate_road_grid(4, 3, 50.85, 4.35, 7).unwrap();
        assert_eq!(graph.node_count(), 12);
        // 3 * 3 horizontal + 4 * 2 vertical streets, both directions
        assert!(graph.edge_count() >= 2 * (9 + 8));
        assert!(graph.edge_weight(1, 2).is_some());
        assert!(graph.edge_weight(2, 1).is_some());
        assert!(graph.coordinates(12).is_ok());
    }

    #[test]
    fn test_generators_are_deterministic() {
        let a = generate_random_graph(6, 0.4, 42).unwrap();
        let b = generate_random_graph(6, 0.4, 42).unwrap();
        for u in 0..6 {
            assert_eq!(a.neighbors(u).unwrap(), b.neighbors(u).unwrap());
        }
    }
}
