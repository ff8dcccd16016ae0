//! Adjacency-List Graph
//!
//! The graph owns an insertion-ordered map from each node to the ordered
//! sequence of its neighbors.
//!
//! # Ordering
//!
//! Nodes are listed in the order they were first seen, whether through
//! `add_node` or as an edge endpoint. Neighbor sequences are append-only and
//! keep the order edges were added in. Adding the same edge twice records it
//! twice; nothing is deduplicated.
//!
//! # Invariant
//!
//! Every node appearing in a neighbor sequence is also a key of the map.
//! `add_edge` inserts missing endpoints before touching any adjacency list.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::trace;

use super::node::{EdgeKind, Node};
use crate::error::{GraphError, GraphResult};

/// Neighbor sequence of a single node. Most nodes have few neighbors, so the
/// first four stay inline.
type Neighbors<N> = SmallVec<[N; 4]>;

/// A mutable graph of `N` nodes stored as adjacency lists.
///
/// # Example
///
/// ```rust
/// use adjacency_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", false);
/// graph.add_edge("B", "C", true);
///
/// assert_eq!(graph.get_nodes(), vec!["A", "B", "C"]);
/// assert_eq!(graph.get_neighbors("B"), Some(&["A", "C"][..]));
/// assert_eq!(graph.get_neighbors("C"), Some(&[][..]));
/// assert_eq!(graph.get_neighbors("Z"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N>
where
    N: Node,
{
    /// Every node, in first-seen order, with its outgoing/adjacent neighbors.
    adjacency: IndexMap<N, Neighbors<N>>,
}

impl<N> Graph<N>
where
    N: Node,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(capacity),
        }
    }

    /// Build a graph by adding each edge in order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, EdgeKind)>,
    {
        let mut graph = Self::new();
        for (source, target, kind) in edges {
            graph.add_edge_kind(source, target, kind);
        }
        graph
    }

    /// Add a node to the graph.
    ///
    /// Does nothing if the node is already present; its neighbors are kept.
    pub fn add_node(&mut self, node: N) {
        if let Entry::Vacant(entry) = self.adjacency.entry(node) {
            trace!(nodes = entry.index() + 1, "node added");
            entry.insert(Neighbors::new());
        }
    }

    /// Add an edge between `node1` and `node2`.
    ///
    /// Missing endpoints are added first. `node2` is appended to `node1`'s
    /// neighbors, and when `directed` is false `node1` is also appended to
    /// `node2`'s neighbors. An undirected self-loop therefore lists the node
    /// twice in its own neighbors.
    pub fn add_edge(&mut self, node1: N, node2: N, directed: bool) {
        self.add_edge_kind(node1, node2, EdgeKind::from(directed));
    }

    /// Add an edge recorded according to `kind`.
    pub fn add_edge_kind(&mut self, source: N, target: N, kind: EdgeKind) {
        self.add_node(source.clone());
        self.add_node(target.clone());

        if let Some(neighbors) = self.adjacency.get_mut(&source) {
            neighbors.push(target.clone());
        }
        if !kind.is_directed() {
            if let Some(neighbors) = self.adjacency.get_mut(&target) {
                neighbors.push(source);
            }
        }

        trace!(%kind, "edge added");
    }

    /// Add an edge from `source` to `target` only.
    pub fn add_directed_edge(&mut self, source: N, target: N) {
        self.add_edge_kind(source, target, EdgeKind::Directed);
    }

    /// Add an edge recorded at both endpoints.
    pub fn add_undirected_edge(&mut self, a: N, b: N) {
        self.add_edge_kind(a, b, EdgeKind::Undirected);
    }

    /// Get all nodes in insertion order.
    pub fn get_nodes(&self) -> Vec<N> {
        self.adjacency.keys().cloned().collect()
    }

    /// Get the neighbors of a node.
    ///
    /// Returns `None` if the node is not in the graph, and an empty slice if
    /// it is present but has no neighbors.
    pub fn get_neighbors<Q>(&self, node: &Q) -> Option<&[N]>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.get(node).map(|neighbors| neighbors.as_slice())
    }

    /// Get the neighbors of a node, failing if it is not in the graph.
    pub fn try_neighbors<Q>(&self, node: &Q) -> GraphResult<&[N]>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.get_neighbors(node)
            .ok_or_else(|| GraphError::NodeNotFound(format!("{:?}", node)))
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Iterate over `(node, neighbors)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> + '_ {
        self.adjacency
            .iter()
            .map(|(node, neighbors)| (node, neighbors.as_slice()))
    }

    /// Check whether a node is in the graph.
    pub fn contains_node<Q>(&self, node: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.contains_key(node)
    }

    /// Number of entries in a node's neighbor sequence, duplicates included.
    pub fn degree<Q>(&self, node: &Q) -> Option<usize>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_neighbors(node).map(<[N]>::len)
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Graphs are equal when they list the same nodes in the same order with the
/// same neighbor sequences.
impl<N> PartialEq for Graph<N>
where
    N: Node,
{
    fn eq(&self, other: &Self) -> bool {
        self.adjacency.iter().eq(other.adjacency.iter())
    }
}

impl<N> Eq for Graph<N> where N: Node {}

impl<N> Default for Graph<N>
where
    N: Node,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Extend<N> for Graph<N>
where
    N: Node,
{
    fn extend<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for node in nodes {
            self.add_node(node);
        }
    }
}

/// One line per node, `"<node>: <n1>, <n2>"`, in insertion order.
impl<N> fmt::Display for Graph<N>
where
    N: Node + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (node, neighbors)) in self.adjacency.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: ", node)?;
            for (j, neighbor) in neighbors.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", neighbor)?;
            }
        }
        Ok(())
    }
}
