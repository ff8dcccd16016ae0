//! Adjacency Core
//!
//! This crate provides a small in-memory graph container built on adjacency
//! lists. It supports:
//!
//! - Adding nodes of any hashable identifier type
//! - Adding directed or undirected edges, creating missing endpoints
//! - Listing nodes in insertion order
//! - Looking up a node's neighbors in the order edges were added
//!
//! There are no traversal algorithms, weights, or removal operations.
//!
//! # Architecture
//!
//! - `graph`: the [`Graph`] container and its node and edge types
//! - `error`: error types for checked lookups
//!
//! # Example
//!
//! ```rust
//! use adjacency_core::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", false);
//! graph.add_edge("A", "C", false);
//! graph.add_edge("C", "D", true);
//!
//! assert_eq!(graph.get_nodes(), vec!["A", "B", "C", "D"]);
//! assert_eq!(graph.get_neighbors("C"), Some(&["A", "D"][..]));
//! assert_eq!(graph.get_neighbors("E"), None);
//!
//! println!("{graph}");
//! // A: B, C
//! // B: A
//! // C: A, D
//! // D:
//! ```

pub mod error;
pub mod graph;

pub use error::{GraphError, GraphResult};
pub use graph::{EdgeKind, Graph, Node};
