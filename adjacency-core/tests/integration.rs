//! Integration Tests for the Adjacency Graph
//!
//! These tests exercise the public API the way a caller builds and queries
//! a graph: nodes and edges added incrementally, then listed and rendered.

use adjacency_core::{EdgeKind, Graph, GraphError};

/// Build the sample graph: A-B, A-C, B-C undirected, C->D directed, D-A undirected.
fn sample_graph() -> Graph<&'static str> {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", false);
    graph.add_edge("A", "C", false);
    graph.add_edge("B", "C", false);
    graph.add_edge("C", "D", true);
    graph.add_edge("D", "A", false);
    graph
}

/// Test that repeated add_node calls list a node exactly once.
#[test]
fn node_listed_once_regardless_of_repeats() {
    let mut graph = Graph::new();

    for _ in 0..5 {
        graph.add_node(7_u32);
    }
    graph.add_node(8);
    graph.add_node(7);

    assert_eq!(graph.get_nodes(), vec![7, 8]);
}

/// Test that an undirected edge is visible from both endpoints.
#[test]
fn undirected_edge_symmetry() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", false);

    assert!(graph.get_neighbors("A").unwrap().contains(&"B"));
    assert!(graph.get_neighbors("B").unwrap().contains(&"A"));
}

/// Test that a directed edge is only visible from its source.
#[test]
fn directed_edge_asymmetry() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", true);

    assert!(graph.get_neighbors("A").unwrap().contains(&"B"));
    assert!(!graph.get_neighbors("B").unwrap().contains(&"A"));

    // The reverse relation appears once it is added separately.
    graph.add_edge("B", "A", true);
    assert!(graph.get_neighbors("B").unwrap().contains(&"A"));
}

/// Test that an unknown node is distinguishable from a node with no neighbors.
#[test]
fn unknown_node_is_not_an_empty_list() {
    let mut graph = Graph::new();
    graph.add_node("isolated");

    let isolated = graph.get_neighbors("isolated");
    let unknown = graph.get_neighbors("unknown");

    assert_eq!(isolated, Some(&[][..]));
    assert_eq!(unknown, None);
    assert_ne!(isolated, unknown);

    assert!(matches!(
        graph.try_neighbors("unknown"),
        Err(GraphError::NodeNotFound(_))
    ));
}

/// Test node order and append order on the sample graph.
#[test]
fn sample_graph_preserves_append_order() {
    let graph = sample_graph();

    assert_eq!(graph.get_nodes(), vec!["A", "B", "C", "D"]);

    // D-A is recorded at D and A only; C->D adds nothing to D.
    assert_eq!(graph.get_neighbors("A"), Some(&["B", "C", "D"][..]));
    assert_eq!(graph.get_neighbors("B"), Some(&["A", "C"][..]));
    assert_eq!(graph.get_neighbors("C"), Some(&["A", "B", "D"][..]));
    assert_eq!(graph.get_neighbors("D"), Some(&["A"][..]));
}

/// Test that adding the same edge twice keeps both entries.
#[test]
fn duplicate_edges_are_kept() {
    let mut graph = Graph::new();
    graph.add_edge(1, 2, false);
    graph.add_edge(1, 2, false);
    graph.add_edge(1, 2, true);

    assert_eq!(graph.get_neighbors(&1), Some(&[2, 2, 2][..]));
    assert_eq!(graph.get_neighbors(&2), Some(&[1, 1][..]));
    assert_eq!(graph.degree(&1), Some(3));
}

/// Test that an undirected self-loop appends the node to itself twice.
#[test]
fn undirected_self_loop_appends_twice() {
    let mut graph = Graph::new();
    graph.add_edge("S", "S", false);

    assert_eq!(graph.get_nodes(), vec!["S"]);
    assert_eq!(graph.get_neighbors("S"), Some(&["S", "S"][..]));
}

/// Test the textual rendering of the sample graph.
#[test]
fn sample_graph_rendering() {
    let graph = sample_graph();

    let expected = "A: B, C, D\nB: A, C\nC: A, B, D\nD: A";
    assert_eq!(graph.to_string(), expected);
}

/// Test a fully directed graph containing a cycle.
#[test]
fn directed_cycle_rendering() {
    let graph = Graph::from_edges([
        (1, 2, EdgeKind::Directed),
        (1, 3, EdgeKind::Directed),
        (2, 3, EdgeKind::Directed),
        (3, 1, EdgeKind::Directed),
    ]);

    assert_eq!(graph.get_nodes(), vec![1, 2, 3]);
    assert_eq!(graph.to_string(), "1: 2, 3\n2: 3\n3: 1");
}

/// Test that every edge endpoint is a known node.
#[test]
fn every_neighbor_is_a_node() {
    let graph = sample_graph();

    for (_, neighbors) in graph.iter() {
        for neighbor in neighbors {
            assert!(graph.contains_node(neighbor));
        }
    }
}

/// Test that owned string nodes work with borrowed lookups.
#[test]
fn owned_string_nodes() {
    let mut graph: Graph<String> = Graph::new();
    graph.add_undirected_edge("left".to_string(), "right".to_string());
    graph.add_directed_edge("right".to_string(), "far".to_string());

    assert_eq!(
        graph.get_neighbors("right").map(<[String]>::to_vec),
        Some(vec!["left".to_string(), "far".to_string()])
    );
    assert_eq!(graph.to_string(), "left: right\nright: left, far\nfar: ");
}
