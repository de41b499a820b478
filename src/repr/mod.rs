/*!
# Representations

The three canonical storage layouts of an undirected, unweighted graph:

- [`AdjMatrix`]: dense `n × n` binary matrix (one [`NodeBitSet`] per row),
- [`AdjList`]: one insertion-ordered, duplicate-free neighborhood per node,
- [`IncidenceMatrix`]: `n × m` binary matrix (one [`EdgeBitSet`] per row), one column per edge.

All three are immutable once built. They are either produced by the
[`GraphBuilder`](crate::graph::GraphBuilder), by one of the [`convert`](crate::convert) functions,
or from raw data via their validating `try_from_*` constructors.

Every representation implements [`GraphNodeOrder`], [`GraphEdgeOrder`], [`AdjacencyList`] and
[`AdjacencyTest`], so connectivity can be compared independently of the storage layout (see [`digest`]).
*/

use crate::{
    edge::*,
    error::{Result, invalid_unless},
    node::*,
    ops::*,
};

mod adj_list;
mod adj_matrix;
mod incidence;

pub mod digest;

pub use adj_list::*;
pub use adj_matrix::*;
pub use incidence::*;

/// Reads a raw `0/1` cell. Anything else is rejected.
fn binary_cell(value: u8, row: usize, col: usize, what: &str) -> Result<bool> {
    invalid_unless!(
        value <= 1,
        "{what} entry ({row}, {col}) is {value}, expected 0 or 1"
    );
    Ok(value == 1)
}

/// Checks that all raw rows have length `cols`
fn check_rectangular<R: AsRef<[u8]>>(rows: &[R], cols: usize, what: &str) -> Result<()> {
    for (i, row) in rows.iter().enumerate() {
        let len = row.as_ref().len();
        invalid_unless!(
            len == cols,
            "{what} row {i} has {len} entries, expected {cols}"
        );
    }
    Ok(())
}
