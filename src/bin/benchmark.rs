use keyed_sssp::graph::generators::{node_label, random_graph};
use keyed_sssp::graph::{Graph, LabelledGraph};
use keyed_sssp::{Dijkstra, HeapDijkstra, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

type BenchGraph = LabelledGraph<String, u32>;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &BenchGraph, start: &String) -> (Duration, usize)
where
    A: ShortestPathAlgorithm<String, u32, BenchGraph>,
{
    println!("Running {} on graph with {} nodes...", name, graph.node_count());

    let started = Instant::now();
    let table = algorithm.compute_distances(graph, start);
    let duration = started.elapsed();

    let reachable = table.reachable_count();
    println!("  - Found {} reachable nodes in {:?}", reachable, duration);

    (duration, reachable)
}

fn main() {
    env_logger::init();

    // The linear scan is quadratic, keep sizes modest
    let graph_sizes = vec![100, 500, 1_000, 2_000, 5_000];
    let edge_factor = 4.0;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: linear-scan Dijkstra vs heap Dijkstra");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let linear = Dijkstra::new();
    let heap = HeapDijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = random_graph(&mut rng, size, edge_factor, 100);
        let start = node_label(0);

        let (linear_time, linear_reachable) = benchmark_algorithm("Dijkstra", &linear, &graph, &start);
        let (heap_time, heap_reachable) = benchmark_algorithm("HeapDijkstra", &heap, &graph, &start);
        assert_eq!(linear_reachable, heap_reachable, "solvers disagree on reachability");

        let speedup = linear_time.as_secs_f64() / heap_time.as_secs_f64();
        println!("Speedup - heap vs linear: {:.2}x", speedup);

        results.push((size, graph.edge_count(), linear_time, heap_time, speedup));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<12} | {:<12} | {:<8}", "Nodes", "Edges", "Linear (ms)", "Heap (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, edges, linear_time, heap_time, speedup) in &results {
        println!(
            "{:<10} | {:<10} | {:<12.3} | {:<12.3} | {:<8.2}",
            size,
            edges,
            linear_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() * 1000.0,
            speedup
        );
    }
}
