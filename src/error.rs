//! Error types shared by all graph operations.

use crate::node::*;

/// Errors raised while building or converting graph representations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The input cannot describe a graph (e.g. an empty edge list).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Positional access outside of `0..len`.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A raw matrix or list violates the structural invariant of its representation.
    #[error("Invalid representation: {0}")]
    InvalidRepresentation(String),

    /// A vertex label falls outside of the dense range `0..num_nodes`.
    #[error("Vertex label {label} is not in 0..{num_nodes}; labels must be dense")]
    SparseVertexLabel { label: Node, num_nodes: NumNodes },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Shorthand for returning `Err(GraphError::InvalidRepresentation)` early when a condition fails
macro_rules! invalid_unless {
    ($cond : expr, $($info : tt)+) => {
        if !($cond) {
            return Err($crate::error::GraphError::InvalidRepresentation(format!($($info)+)));
        }
    };
}

pub(crate) use invalid_unless;
