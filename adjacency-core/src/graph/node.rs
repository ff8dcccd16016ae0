//! Graph Nodes
//!
//! This module defines what may act as a node identifier and how an edge
//! between two nodes is recorded.

use std::fmt;
use std::hash::Hash;

/// A node identifier in the graph.
///
/// Nodes carry no attributes beyond their identity, so any type that can be
/// used as a hash-map key qualifies: strings, integers, small enums, tuples.
/// This trait is implemented automatically for every such type.
pub trait Node: Hash + Eq + Clone {}

impl<T> Node for T where T: Hash + Eq + Clone {}

/// How an edge is recorded in the adjacency lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeKind {
    /// Recorded only from source to target.
    Directed,

    /// Recorded in both endpoints' adjacency lists.
    #[default]
    Undirected,
}

impl EdgeKind {
    /// Check if the edge is recorded in one direction only.
    pub fn is_directed(&self) -> bool {
        matches!(self, EdgeKind::Directed)
    }
}

impl From<bool> for EdgeKind {
    /// `true` means directed, matching the `directed` flag of `Graph::add_edge`.
    fn from(directed: bool) -> Self {
        if directed {
            EdgeKind::Directed
        } else {
            EdgeKind::Undirected
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Directed => f.write_str("directed"),
            EdgeKind::Undirected => f.write_str("undirected"),
        }
    }
}
