use rand::prelude::*;
use rand::rngs::StdRng;
use road_router::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use road_router::graph::generators::generate_road_grid;
use road_router::graph::{Graph, NodeId, RoadGraph};
use road_router::Error;
use std::time::{Duration, Instant};

/// Number of random queries per grid size
const QUERIES: usize = 200;

// Runs random point-to-point queries and returns (total time, routes found, longest route)
fn benchmark_queries(graph: &RoadGraph<f64>, rng: &mut StdRng) -> (Duration, usize, f64) {
    let dijkstra = Dijkstra::new();
    let n = graph.node_count() as NodeId;

    let mut total = Duration::ZERO;
    let mut found = 0;
    let mut longest = 0.0f64;

    for _ in 0..QUERIES {
        let source = rng.gen_range(1..=n);
        let target = rng.gen_range(1..=n);

        let start = Instant::now();
        let result = dijkstra.compute(graph, source, target);
        total += start.elapsed();

        match result {
            Ok(route) => {
                found += 1;
                longest = longest.max(route.distance);
            }
            Err(Error::NoPathFound { .. }) => {}
            Err(e) => panic!("query {} -> {} failed: {}", source, target, e),
        }
    }

    (total, found, longest)
}

fn main() {
    env_logger::init();

    let grid_sizes = vec![
        // Neighbourhood
        30,
        // District
        100,
        // City
        300,
        // Metropolitan area, if memory allows
        600,
    ];

    let mut rng = StdRng::seed_from_u64(2024);
    let mut results = Vec::new();

    println!("=====================================================");
    println!("Benchmark: Dijkstra point-to-point on synthetic road grids");
    println!("Queries per grid: {}", QUERIES);
    println!("=====================================================");

    for &size in &grid_sizes {
        println!("\nGenerating {}x{} road grid...", size, size);
        let graph = match generate_road_grid(size, size, 50.85, 4.35, size as u64) {
            Ok(graph) => graph,
            Err(e) => {
                eprintln!("Failed to generate grid: {}", e);
                continue;
            }
        };
        println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let (total, found, longest) = benchmark_queries(&graph, &mut rng);
        let avg_ms = total.as_secs_f64() * 1000.0 / QUERIES as f64;
        println!("  - {} / {} routes found, average {:.3} ms per query", found, QUERIES, avg_ms);

        results.push((size, graph.node_count(), graph.edge_count(), avg_ms, longest));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<8} | {:<10} | {:<10} | {:<12} | {:<14}",
             "Grid", "Nodes", "Edges", "Avg (ms)", "Longest (km)");
    println!("-----------------------------------------------------");

    for (size, nodes, edges, avg_ms, longest) in &results {
        println!("{:<8} | {:<10} | {:<10} | {:<12.3} | {:<14.2}",
                 format!("{}x{}", size, size), nodes, edges, avg_ms, longest / 1000.0);
    }
}
