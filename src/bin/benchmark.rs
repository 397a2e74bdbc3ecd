use std::time::{Duration, Instant};
use log::info;
use weighted_graph::graph::generators::{generate_random_connected, GeneratorConfig};
use weighted_graph::{Graph, PriorityRule, SpanningTreeBuilder, UndirectedGraph};

// Function to time a closure and report how long it took
fn time<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    let duration = start.elapsed();
    println!("  - {:<28} {:?}", label, duration);
    (value, duration)
}

fn benchmark_graph(graph: &UndirectedGraph<usize, i64>) -> (Duration, Duration, Duration, Duration) {
    let last = graph.vertex_count() - 1;

    let (bfs_path, bfs_time) = time("breadth-first search", || graph.breadth_first_search(&0, &last));
    let (dfs_path, dfs_time) = time("depth-first search", || graph.depth_first_search(&0, &last));
    println!("    BFS path: {} vertices, DFS path: {} vertices", bfs_path.len(), dfs_path.len());

    let cumulative = SpanningTreeBuilder::<usize>::new();
    let (tree, cumulative_time) = time("spanning tree (cumulative)", || cumulative.build_with_costs::<i64, _>(graph));

    let classical = SpanningTreeBuilder::<usize>::new().with_rule(PriorityRule::EdgeWeight);
    let (classic_tree, classical_time) = time("spanning tree (edge weight)", || classical.build_with_costs::<i64, _>(graph));

    match (tree, classic_tree) {
        (Ok(tree), Ok(classic_tree)) => println!(
            "    Tree weight: cumulative rule {:?}, edge-weight rule {:?}",
            tree.tree.total_weight(),
            classic_tree.tree.total_weight()
        ),
        (Err(err), _) | (_, Err(err)) => println!("    Spanning tree failed: {}", err),
    }

    (bfs_time, dfs_time, cumulative_time, classical_time)
}

fn main() {
    // Initialize logging
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Edge factor: extra edges per vertex on top of the spanning skeleton
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: traversal and spanning tree construction");
    println!("Edge factor: {} extra edges per vertex", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random connected graph with {} vertices...", size);
        let config = GeneratorConfig::new(size)
            .with_extra_edge_factor(edge_factor)
            .with_seed(size as u64);
        let graph = generate_random_connected(&config);
        info!("generated graph: {} vertices, {} edges", graph.vertex_count(), graph.edge_count());

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());
        results.push((size, benchmark_graph(&graph)));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<10} | {:<15} | {:<15}",
             "Vertices", "BFS (ms)", "DFS (ms)", "Cumulative (ms)", "EdgeWeight (ms)");
    println!("-----------------------------------------------------");

    for (size, (bfs, dfs, cumulative, classical)) in &results {
        println!("{:<10} | {:<10} | {:<10} | {:<15} | {:<15}",
                 size,
                 bfs.as_millis(),
                 dfs.as_millis(),
                 cumulative.as_millis(),
                 classical.as_millis());
    }
}
