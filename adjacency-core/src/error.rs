//! Error types for checked graph lookups.

use thiserror::Error;

/// Errors returned by the checked lookup methods on [`Graph`](crate::Graph).
///
/// Plain lookups such as `get_neighbors` never fail; they return `None` for
/// unknown nodes instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The node is not in the graph. Carries the node's `Debug` rendering.
    #[error("Node {0} not found")]
    NodeNotFound(String),
}

/// Convenience result type for checked graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
