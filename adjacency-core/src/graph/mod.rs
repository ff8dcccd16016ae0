//! Adjacency Graph
//!
//! This module implements the graph container: a set of nodes, each with an
//! ordered list of the nodes it is connected to.
//!
//! # Overview
//!
//! - Nodes are caller-supplied identifiers of any hashable type
//! - An edge from A to B appends B to A's adjacency list
//! - An undirected edge also appends A to B's adjacency list
//!
//! # Design Decisions
//!
//! 1. Nodes live in an insertion-ordered map, so listing and rendering follow
//!    the order nodes were first seen.
//!
//! 2. Adjacency lists are plain sequences. Duplicate edges are kept because
//!    the order and multiplicity of appends is observable.
//!
//! 3. Looking up an unknown node yields `None`, not an error. A checked
//!    variant returning [`GraphError`](crate::GraphError) exists for callers
//!    that want to propagate with `?`.

mod adjacency;
mod node;

pub use adjacency::Graph;
pub use node::{EdgeKind, Node};
