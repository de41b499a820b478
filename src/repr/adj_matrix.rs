use stream_bitset::prelude::{
    BitmaskSliceStream, BitmaskStreamConsumer, BitmaskStreamToIndices, ToBitmaskStream,
};

use super::*;

/// Representation using an Adjacency-Matrix.
///
/// Row `u` is a [`NodeBitSet`] with bit `v` set iff the edge `(u, v)` exists.
/// The matrix is always symmetric; a self-loop `(u, u)` only sets the diagonal entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjMatrix {
    rows: Vec<NodeBitSet>,
    num_edges: NumEdges,
}

impl AdjMatrix {
    /// Creates an `n × n` zero matrix
    pub(crate) fn new(n: NumNodes) -> Self {
        Self {
            rows: vec![NodeBitSet::new(n); n as usize],
            num_edges: 0,
        }
    }

    /// Creates the matrix of `n` nodes from edges whose endpoints are all in `0..n`.
    /// Parallel edges collapse into a single entry.
    pub(crate) fn from_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut matrix = Self::new(n);
        for edge in edges {
            matrix.set_edge(edge);
        }
        matrix
    }

    /// Sets `[u][v]` and `[v][u]`. Returns *true* if the entry was set before.
    pub(crate) fn set_edge(&mut self, Edge(u, v): Edge) -> bool {
        let existed = self.rows[u as usize].set_bit(v);
        if !existed {
            self.rows[v as usize].set_bit(u);
            self.num_edges += 1;
        }
        existed
    }

    /// Creates an adjacency matrix from raw `0/1` rows.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidRepresentation`](crate::error::GraphError::InvalidRepresentation)
    /// if the matrix is empty, not square, contains values other than `0/1`, or is not symmetric.
    ///
    /// # Example
    /// ```
    /// use graph_reprs::prelude::*;
    ///
    /// let matrix = AdjMatrix::try_from_rows(&[[0, 1], [1, 1]]).unwrap();
    /// assert!(matrix.has_edge(1, 0));
    /// assert!(matrix.has_self_loop(1));
    /// assert_eq!(matrix.number_of_edges(), 2);
    ///
    /// assert!(AdjMatrix::try_from_rows(&[[0, 1], [0, 0]]).is_err());
    /// ```
    pub fn try_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        invalid_unless!(n > 0, "adjacency matrix has no rows");
        check_rectangular(rows, n, "adjacency matrix")?;

        let mut matrix = Self::new(n as NumNodes);
        for (u, row) in rows.iter().enumerate() {
            for (v, &value) in row.as_ref().iter().enumerate() {
                let set = binary_cell(value, u, v, "adjacency matrix")?;
                invalid_unless!(
                    set == (rows[v].as_ref()[u] == 1),
                    "adjacency matrix is not symmetric at ({u}, {v})"
                );
                if set && u <= v {
                    matrix.set_edge(Edge(u as Node, v as Node));
                }
            }
        }

        Ok(matrix)
    }

    /// Returns the entry `[u][v]` as `0` or `1`
    /// ** Panics if `u >= n || v >= n` **
    pub fn entry(&self, u: Node, v: Node) -> u8 {
        self.rows[u as usize].get_bit(v) as u8
    }

    /// Returns row `u` as bitset
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &NodeBitSet {
        &self.rows[u as usize]
    }

    /// Returns *true* if `[u][v] == [v][u]` for all `u, v`
    pub fn is_symmetric(&self) -> bool {
        self.vertices()
            .all(|u| self.neighbors_of(u).all(|v| self.has_edge(v, u)))
    }

    /// Exports the matrix as raw `0/1` rows
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.vertices()
            .map(|u| self.vertices().map(|v| self.entry(u, v)).collect())
            .collect()
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let iter: BitmaskStreamToIndices<BitmaskSliceStream<'_>, Node, true> =
            self.rows[u as usize].bitmask_stream().iter_set_bits();
        iter
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].cardinality()
    }

    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        self.rows[u as usize].clone()
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.rows[u as usize].get_bit(v)
    }
}
