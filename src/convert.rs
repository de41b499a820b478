/*!
# Conversions

Free functions deriving one representation directly from another, without going through the
edge list a [`Graph`](crate::graph::Graph) was built from. Feeding a stored representation into a
converter and comparing the result to the stored target shows that the representations carry
the same information:

```
use graph_reprs::prelude::*;

let graph = build_graph([[0, 1], [1, 2], [2, 4], [0, 4], [4, 3], [3, 0]]).unwrap();

let list = adjacency_matrix_to_list(graph.adjacency_matrix());
assert!(list.same_connectivity(graph.adjacency_list()));

let incidence = adjacency_list_to_incidence(graph.adjacency_list());
let list = incidence_to_adjacency_list(&incidence).unwrap();
assert!(list.same_connectivity(graph.adjacency_list()));
```

Neighborhood order of a derived [`AdjList`] follows the scan order of the source and may
differ from the order produced by the builder.
*/

use tracing::debug;

use crate::{
    edge::*,
    error::Result,
    node::*,
    ops::*,
    repr::*,
};

/// Derives the adjacency list from an adjacency matrix.
///
/// Scans every cell once in row-major order; a `1` at `[i][k]` appends `i` to the
/// neighborhood of `k`. Runs in `O(n^2)`.
pub fn adjacency_matrix_to_list(matrix: &AdjMatrix) -> AdjList {
    let n = matrix.number_of_nodes();
    let mut list = AdjList::new(n);

    for i in matrix.vertices() {
        for k in matrix.vertices() {
            if matrix.entry(i, k) == 1 {
                list.append_neighbor(k, i);
            }
        }
    }

    debug!(nodes = n, "converted adjacency matrix to adjacency list");
    list
}

/// Derives the adjacency matrix from an adjacency list. Runs in `O(n^2 + sum of degrees)`.
pub fn adjacency_list_to_matrix(list: &AdjList) -> AdjMatrix {
    let n = list.number_of_nodes();
    let matrix = AdjMatrix::from_edges(n, list.edges(true));

    debug!(
        nodes = n,
        edges = matrix.number_of_edges(),
        "converted adjacency list to adjacency matrix"
    );
    matrix
}

/// Derives the incidence matrix from an adjacency list.
///
/// The number of columns is [`AdjList::count_edges`]; column order is that of
/// [`AdjList::reconstruct_edges`], i.e. node `i` emits `(i, j)` for every neighbor `j >= i`.
/// Nodes without neighbors contribute no column. Runs in `O(n * m)`.
pub fn adjacency_list_to_incidence(list: &AdjList) -> IncidenceMatrix {
    let n = list.number_of_nodes();
    let num_edges = list.count_edges();
    let edges = list.reconstruct_edges();
    debug_assert_eq!(edges.len(), num_edges as usize);

    debug!(
        nodes = n,
        edges = num_edges,
        "converted adjacency list to incidence matrix"
    );
    IncidenceMatrix::from_edges(n, &edges)
}

/// Recovers the edges stored in the columns of an incidence matrix, in column order.
///
/// # Errors
/// Returns [`GraphError::InvalidRepresentation`](crate::error::GraphError::InvalidRepresentation)
/// for a column with zero or more than two `1`s.
pub fn incidence_to_edges(matrix: &IncidenceMatrix) -> Result<Vec<Edge>> {
    matrix.columns().collect()
}

/// Derives the adjacency list from an incidence matrix.
///
/// Every column is scanned top to bottom: the first `1` is the first endpoint, the second
/// `1` the second endpoint, a lone `1` marks a self-loop. The recovered edges are then added
/// in column order, each appending in both directions unless already present.
/// Runs in `O(n * m)`.
///
/// # Errors
/// Returns [`GraphError::InvalidRepresentation`](crate::error::GraphError::InvalidRepresentation)
/// for a column with zero or more than two `1`s.
pub fn incidence_to_adjacency_list(matrix: &IncidenceMatrix) -> Result<AdjList> {
    let n: NumNodes = matrix.number_of_nodes();
    let edges = incidence_to_edges(matrix)?;
    let list = AdjList::from_edges(n, edges);

    debug!(
        nodes = n,
        edges = matrix.number_of_edges(),
        "converted incidence matrix to adjacency list"
    );
    Ok(list)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{graph::build_graph, repr::digest::GraphDigest, testing::*};

    #[test]
    fn matrix_to_list() {
        let graph = build_graph([[0, 1], [1, 2], [2, 4], [0, 4], [4, 3], [3, 0]]).unwrap();
        let list = adjacency_matrix_to_list(graph.adjacency_matrix());

        assert!(list.same_connectivity(graph.adjacency_list()));
        // derived from the column perspective, so neighbors come out in ascending order
        assert_eq!(list.neighborhood_of(0).as_slice(), &[1, 3, 4]);
        assert_eq!(list.neighborhood_of(4).as_slice(), &[0, 2, 3]);
    }

    #[test]
    fn list_to_matrix() {
        let graph = build_graph([[0, 1], [1, 2], [2, 2], [1, 0]]).unwrap();
        assert_eq!(
            &adjacency_list_to_matrix(graph.adjacency_list()),
            graph.adjacency_matrix()
        );
    }

    #[test]
    fn list_to_incidence() {
        let graph = build_graph([[0, 1], [1, 2], [2, 4], [0, 4], [4, 3], [3, 0]]).unwrap();
        let incidence = adjacency_list_to_incidence(graph.adjacency_list());

        assert_eq!(incidence.number_of_nodes(), 5);
        assert_eq!(incidence.number_of_edges(), 6);
        assert_eq!(
            incidence_to_edges(&incidence).unwrap(),
            vec![
                Edge(0, 1),
                Edge(0, 4),
                Edge(0, 3),
                Edge(1, 2),
                Edge(2, 4),
                Edge(3, 4)
            ]
        );

        let columns = |m: &IncidenceMatrix| {
            incidence_to_edges(m)
                .unwrap()
                .into_iter()
                .sorted_unstable()
                .collect_vec()
        };
        assert_eq!(columns(&incidence), columns(graph.incidence_matrix()));
    }

    #[test]
    fn list_to_incidence_counts_self_loops_once() {
        let list = AdjList::try_from_neighborhoods(&[vec![0, 1], vec![0], vec![]]).unwrap();
        let incidence = adjacency_list_to_incidence(&list);

        assert_eq!(incidence.number_of_edges(), 2);
        assert_eq!(incidence.to_rows(), vec![vec![1, 1], vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn incidence_to_list() {
        let incidence =
            IncidenceMatrix::try_from_rows(&[[1, 0, 0], [1, 1, 0], [0, 1, 1], [0, 0, 0]]).unwrap();
        let list = incidence_to_adjacency_list(&incidence).unwrap();

        assert_eq!(
            list.to_vecs(),
            vec![vec![1], vec![0, 2], vec![1, 2], vec![]]
        );
    }

    #[test]
    fn duplicate_columns_collapse() {
        let graph = build_graph([[0, 1], [1, 0]]).unwrap();
        let list = incidence_to_adjacency_list(graph.incidence_matrix()).unwrap();
        assert_eq!(list.to_vecs(), vec![vec![1], vec![0]]);

        // the list only keeps one of both parallel edges
        assert_eq!(adjacency_list_to_incidence(&list).number_of_edges(), 1);
    }

    #[test]
    fn randomized_round_trips() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 5, 20, 50] {
            for m in [n, n * 4] {
                let graph = build_graph(random_dense_edges(rng, n, m as NumEdges)).unwrap();
                let list = graph.adjacency_list();

                let from_matrix = adjacency_matrix_to_list(graph.adjacency_matrix());
                assert!(from_matrix.same_connectivity(list));
                assert_eq!(&adjacency_list_to_matrix(list), graph.adjacency_matrix());

                let incidence = adjacency_list_to_incidence(list);
                let sorted_columns = |m: &IncidenceMatrix| {
                    incidence_to_edges(m)
                        .unwrap()
                        .into_iter()
                        .sorted_unstable()
                        .dedup()
                        .collect_vec()
                };
                assert_eq!(
                    sorted_columns(&incidence),
                    sorted_columns(graph.incidence_matrix())
                );
                assert_eq!(incidence.digest_sha256(), graph.digest_sha256());

                let from_incidence = incidence_to_adjacency_list(graph.incidence_matrix()).unwrap();
                assert!(from_incidence.same_connectivity(list));
            }
        }
    }

    #[test]
    fn double_conversion_is_idempotent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for n in [1 as NumNodes, 2, 10, 40] {
            for p in [0.1, 0.5, 0.9] {
                let list = AdjList::try_from_neighborhoods(&random_neighborhoods(rng, n, p)).unwrap();
                let incidence = adjacency_list_to_incidence(&list);
                assert_eq!(incidence.number_of_edges(), list.count_edges());

                let back = incidence_to_adjacency_list(&incidence).unwrap();
                assert!(back.same_connectivity(&list));
                assert_eq!(back.count_edges(), list.count_edges());
            }
        }
    }
}
