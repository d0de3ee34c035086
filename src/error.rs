use thiserror::Error;

use crate::{Edge, Vertex};

/// Errors raised by graph operations.
///
/// Most mutations are deliberately infallible (removing an absent vertex or
/// edge is a no-op reported through a `bool`). Errors are reserved for queries
/// and constructions whose preconditions name a specific vertex or edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The named vertex is not part of the graph
    #[error("unknown vertex {0}")]
    UnknownVertex(Vertex),

    /// The named edge is not part of the graph
    #[error("missing edge {0}")]
    MissingEdge(Edge),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GraphError>;
