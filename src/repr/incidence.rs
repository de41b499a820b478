use itertools::Itertools;
use smallvec::SmallVec;

use super::*;
use crate::error::GraphError;

/// Representation using an Incidence-Matrix.
///
/// The matrix has one row per node and one column per edge. Column `k` has a `1` in the rows of
/// both endpoints of edge `k`, or a single `1` if edge `k` is a self-loop. Parallel edges keep
/// their own columns.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceMatrix {
    rows: Vec<EdgeBitSet>,
    num_edges: NumEdges,
}

impl IncidenceMatrix {
    /// Creates the matrix of `n` nodes where column `k` represents `edges[k]`.
    /// All endpoints must be in `0..n`.
    pub(crate) fn from_edges(n: NumNodes, edges: &[Edge]) -> Self {
        let num_edges = edges.len() as NumEdges;
        let mut rows = vec![EdgeBitSet::new(num_edges); n as usize];

        for (k, &Edge(u, v)) in edges.iter().enumerate() {
            rows[u as usize].set_bit(k as NumEdges);
            rows[v as usize].set_bit(k as NumEdges);
        }

        Self { rows, num_edges }
    }

    /// Creates an incidence matrix from raw `0/1` rows (one row per node).
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidRepresentation`] if there are no rows, rows differ in length,
    /// a value is not `0/1`, or a column does not contain exactly one or two `1`s.
    ///
    /// # Example
    /// ```
    /// use graph_reprs::prelude::*;
    ///
    /// let matrix = IncidenceMatrix::try_from_rows(&[[1, 0], [1, 0], [0, 1]]).unwrap();
    /// assert_eq!(matrix.column_endpoints(0), Ok(Edge(0, 1)));
    /// assert_eq!(matrix.column_endpoints(1), Ok(Edge(2, 2)));
    ///
    /// assert!(IncidenceMatrix::try_from_rows(&[[1], [1], [1]]).is_err());
    /// ```
    pub fn try_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        invalid_unless!(!rows.is_empty(), "incidence matrix has no rows");
        let m = rows[0].as_ref().len();
        check_rectangular(rows, m, "incidence matrix")?;

        let mut bit_rows = vec![EdgeBitSet::new(m as NumEdges); rows.len()];
        for (u, row) in rows.iter().enumerate() {
            for (k, &value) in row.as_ref().iter().enumerate() {
                if binary_cell(value, u, k, "incidence matrix")? {
                    bit_rows[u].set_bit(k as NumEdges);
                }
            }
        }

        let matrix = Self {
            rows: bit_rows,
            num_edges: m as NumEdges,
        };
        for k in 0..matrix.num_edges {
            matrix.column_endpoints(k)?;
        }

        Ok(matrix)
    }

    /// Returns the entry `[u][k]` as `0` or `1`
    /// ** Panics if `u >= n || k >= m` **
    pub fn entry(&self, u: Node, k: NumEdges) -> u8 {
        self.rows[u as usize].get_bit(k) as u8
    }

    /// Returns row `u` as bitset over the columns
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &EdgeBitSet {
        &self.rows[u as usize]
    }

    /// Recovers the edge stored in column `k` by scanning the rows top to bottom.
    /// The first `1` becomes the first endpoint, the second `1` the second endpoint.
    /// A column with a single `1` is a self-loop.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `k >= m` and
    /// [`GraphError::InvalidRepresentation`] if the column has zero or more than two `1`s.
    pub fn column_endpoints(&self, k: NumEdges) -> Result<Edge> {
        if k >= self.num_edges {
            return Err(GraphError::IndexOutOfRange {
                index: k as usize,
                len: self.num_edges as usize,
            });
        }

        let mut endpoints: SmallVec<[Node; 2]> = SmallVec::new();
        for u in self.vertices() {
            if self.rows[u as usize].get_bit(k) {
                invalid_unless!(
                    endpoints.len() < 2,
                    "incidence column {k} has more than two entries"
                );
                endpoints.push(u);
            }
        }

        match endpoints.as_slice() {
            [u] => Ok(Edge(*u, *u)),
            [u, v] => Ok(Edge(*u, *v)),
            _ => Err(GraphError::InvalidRepresentation(format!(
                "incidence column {k} has no entry"
            ))),
        }
    }

    /// Returns an iterator over the endpoints of all columns in column order
    pub fn columns(&self) -> impl Iterator<Item = Result<Edge>> + '_ {
        (0..self.num_edges).map(|k| self.column_endpoints(k))
    }

    /// Returns the endpoint of column `k` opposite to `u` (`u` itself for a self-loop).
    /// Requires `[u][k] == 1`.
    fn opposite_endpoint(&self, k: NumEdges, u: Node) -> Node {
        self.vertices()
            .find(|&v| v != u && self.rows[v as usize].get_bit(k))
            .unwrap_or(u)
    }

    /// Exports the matrix as raw `0/1` rows
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.vertices()
            .map(|u| (0..self.num_edges).map(|k| self.entry(u, k)).collect())
            .collect()
    }
}

impl GraphNodeOrder for IncidenceMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }
}

impl GraphEdgeOrder for IncidenceMatrix {
    /// Number of columns, parallel edges included
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for IncidenceMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        (0..self.num_edges)
            .filter(move |&k| self.rows[u as usize].get_bit(k))
            .map(move |k| self.opposite_endpoint(k, u))
            .unique()
    }
}

impl AdjacencyTest for IncidenceMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        (0..self.num_edges).any(|k| {
            let row_u = &self.rows[u as usize];
            let row_v = &self.rows[v as usize];
            row_u.get_bit(k) && row_v.get_bit(k) && (u != v || self.opposite_endpoint(k, u) == u)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges() {
        let edges = [Edge(0, 1), Edge(1, 2), Edge(2, 2), Edge(0, 1)];
        let matrix = IncidenceMatrix::from_edges(3, &edges);

        assert_eq!(matrix.number_of_nodes(), 3);
        assert_eq!(matrix.number_of_edges(), 4);
        assert_eq!(
            matrix.to_rows(),
            vec![vec![1, 0, 0, 1], vec![1, 1, 0, 1], vec![0, 1, 1, 0]]
        );
        assert_eq!(
            matrix.columns().collect::<Result<Vec<_>>>(),
            Ok(edges.to_vec())
        );

        assert_eq!(matrix.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(matrix.neighbors_of(2).collect_vec(), vec![1, 2]);
        assert!(matrix.has_edge(2, 1));
        assert!(matrix.has_self_loop(2));
        assert!(!matrix.has_self_loop(1));
        assert!(!matrix.has_edge(0, 2));
    }

    #[test]
    fn column_errors() {
        let matrix = IncidenceMatrix::from_edges(2, &[Edge(0, 1)]);
        assert_eq!(
            matrix.column_endpoints(1),
            Err(GraphError::IndexOutOfRange { index: 1, len: 1 })
        );

        for rows in [
            vec![vec![0u8], vec![0]],
            vec![vec![1u8], vec![1], vec![1]],
            vec![vec![1u8, 0], vec![1]],
            vec![vec![1u8], vec![3]],
        ] {
            assert!(matches!(
                IncidenceMatrix::try_from_rows(&rows),
                Err(GraphError::InvalidRepresentation(_))
            ));
        }
    }

    #[test]
    fn without_columns() {
        let matrix = IncidenceMatrix::try_from_rows(&[Vec::<u8>::new(), Vec::new()]).unwrap();
        assert_eq!(matrix.number_of_nodes(), 2);
        assert!(matrix.is_singleton());
        assert_eq!(matrix.columns().count(), 0);
    }
}
