//! Builds two sample graphs and prints their structure to stdout.
//!
//! Run with `cargo run --features demo --bin adjacency-demo`. Set
//! `RUST_LOG=trace` to see each node and edge insertion on stderr.

use adjacency_core::{EdgeKind, Graph, GraphResult};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> GraphResult<()> {
    init_tracing();

    let mut graph = Graph::new();

    for node in ["A", "B", "C", "D"] {
        graph.add_node(node);
    }

    graph.add_edge("A", "B", false);
    graph.add_edge("A", "C", false);
    graph.add_edge("B", "C", false);
    graph.add_edge("C", "D", true);
    graph.add_edge("D", "A", false);
    info!(nodes = graph.node_count(), "sample graph built");

    println!("Nodes: {:?}", graph.get_nodes());
    println!("\nGraph Structure (Adjacency List):");
    println!("{graph}");

    println!("\nNeighbors of C: {:?}", graph.try_neighbors("C")?);
    println!("Neighbors of A: {:?}", graph.try_neighbors("A")?);
    println!("Neighbors of Z: {:?}", graph.get_neighbors("Z"));

    let directed_graph = Graph::from_edges([
        (1, 2, EdgeKind::Directed),
        (1, 3, EdgeKind::Directed),
        (2, 3, EdgeKind::Directed),
        (3, 1, EdgeKind::Directed),
    ]);
    info!(nodes = directed_graph.node_count(), "directed graph built");

    println!("\nDirected Graph Structure:");
    println!("{directed_graph}");

    Ok(())
}

/// Initialize tracing subscriber with environment filter, logging to stderr.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
