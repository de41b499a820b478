use std::fmt::{Debug, Display};

use stream_bitset::bitset::BitSetImpl;

use crate::node::*;

/// An edge is defined by two nodes/endpoints.
/// All graphs in this crate are undirected, so `Edge(u, v)` and `Edge(v, u)` describe the
/// same connection; use [`Edge::normalized`] to obtain the canonical orientation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// A BitSet over NumEdges. Used as the row type of an incidence matrix.
pub type EdgeBitSet = BitSetImpl<NumEdges>;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    ///
    /// # Example
    /// ```
    /// use graph_reprs::prelude::*;
    ///
    /// assert_eq!(Edge(4, 3).normalized(), Edge(3, 4));
    /// assert_eq!(Edge(2, 2).normalized(), Edge(2, 2));
    /// ```
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<[Node; 2]> for Edge {
    fn from(value: [Node; 2]) -> Self {
        Edge(value[0], value[1])
    }
}

impl From<&[Node; 2]> for Edge {
    fn from(value: &[Node; 2]) -> Self {
        Edge(value[0], value[1])
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
