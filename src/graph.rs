/*!
# Graph Builder

[`GraphBuilder`] turns a raw edge list into a [`Graph`] holding all three representations.
Construction is a single pass over the normalized edges per representation; the result is
immutable.

```
use graph_reprs::prelude::*;

let graph = build_graph([[0, 1], [1, 2], [2, 0]]).unwrap();
assert_eq!(graph.number_of_nodes(), 3);
assert_eq!(graph.adjacency_list().neighborhood_of(0).as_slice(), &[1, 2]);
```
*/

use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    edge::*,
    error::{GraphError, Result},
    node::*,
    ops::*,
    repr::*,
    utils::{LabelPolicy, VertexIndex},
};

/// An undirected, unweighted graph together with all of its representations.
///
/// All representations are computed eagerly by [`GraphBuilder::build`] and agree on which
/// unordered pairs of nodes are connected. Only the edge list and the incidence matrix
/// keep parallel edges.
#[derive(Debug, Clone)]
pub struct Graph {
    edges: Vec<Edge>,
    index: VertexIndex,
    adj_matrix: AdjMatrix,
    adj_list: AdjList,
    inc_matrix: IncidenceMatrix,
}

impl Graph {
    /// Returns the normalized edges in input order; edge `k` is column `k` of the incidence matrix
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the adjacency matrix
    pub fn adjacency_matrix(&self) -> &AdjMatrix {
        &self.adj_matrix
    }

    /// Returns the adjacency list
    pub fn adjacency_list(&self) -> &AdjList {
        &self.adj_list
    }

    /// Returns the incidence matrix
    pub fn incidence_matrix(&self) -> &IncidenceMatrix {
        &self.inc_matrix
    }

    /// Returns the mapping between the labels of the input and the nodes of this graph
    pub fn vertex_index(&self) -> &VertexIndex {
        &self.index
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.index.number_of_nodes()
    }
}

impl GraphEdgeOrder for Graph {
    /// Length of the edge list, parallel edges included
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adj_list.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adj_list.degree_of(u)
    }
}

impl AdjacencyTest for Graph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adj_matrix.has_edge(u, v)
    }
}

/// Configurable construction of a [`Graph`].
///
/// # Example
/// ```
/// use graph_reprs::{prelude::*, utils::LabelPolicy};
///
/// let graph = GraphBuilder::new()
///     .label_policy(LabelPolicy::Compact)
///     .build([[10, 20], [20, 30]])
///     .unwrap();
///
/// assert_eq!(graph.number_of_nodes(), 3);
/// assert_eq!(graph.edges(), &[Edge(0, 1), Edge(1, 2)]);
/// assert_eq!(graph.vertex_index().label_of(2), Some(30));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    label_policy: LabelPolicy,
}

impl GraphBuilder {
    /// Creates a builder with the default settings (dense labels)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how vertex labels are mapped onto nodes `0..n`
    pub fn label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    /// Builds the graph and all of its representations from `edges`.
    ///
    /// # Errors
    /// - [`GraphError::InvalidInput`] if `edges` is empty,
    /// - [`GraphError::SparseVertexLabel`] if labels are not dense under [`LabelPolicy::Dense`].
    pub fn build<I>(&self, edges: I) -> Result<Graph>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let raw_edges = edges
            .into_iter()
            .map(|e| Into::<Edge>::into(e).normalized())
            .collect_vec();

        if raw_edges.is_empty() {
            return Err(GraphError::InvalidInput(
                "cannot build a graph without edges".to_string(),
            ));
        }

        let index = VertexIndex::from_edges(&raw_edges, self.label_policy)?;
        let edges = if index.is_identity() {
            raw_edges
        } else {
            raw_edges
                .into_iter()
                .map(|e| index.map_edge(e).map(|e| e.normalized()))
                .collect::<Result<Vec<_>>>()?
        };

        let n = index.number_of_nodes();
        debug_assert_eq!(
            edges
                .iter()
                .flat_map(|&Edge(u, v)| [u, v])
                .collect::<FxHashSet<_>>()
                .len(),
            n as usize
        );

        trace!(?edges, "normalized edges");

        let adj_matrix = AdjMatrix::from_edges(n, edges.iter().copied());
        let adj_list = AdjList::from_edges(n, edges.iter().copied());
        let inc_matrix = IncidenceMatrix::from_edges(n, &edges);

        debug!(
            nodes = n,
            edges = edges.len(),
            distinct_pairs = adj_matrix.number_of_edges(),
            "built graph representations"
        );

        Ok(Graph {
            edges,
            index,
            adj_matrix,
            adj_list,
            inc_matrix,
        })
    }
}

/// Builds a [`Graph`] from `edges` using the default [`GraphBuilder`].
///
/// # Errors
/// See [`GraphBuilder::build`].
pub fn build_graph<I>(edges: I) -> Result<Graph>
where
    I: IntoIterator,
    I::Item: Into<Edge>,
{
    GraphBuilder::new().build(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repr::digest::GraphDigest, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    const CYCLE_WITH_CHORD: [[Node; 2]; 6] = [[0, 1], [1, 2], [2, 4], [0, 4], [4, 3], [3, 0]];

    #[test]
    fn scenario() {
        let graph = build_graph(CYCLE_WITH_CHORD).unwrap();

        assert_eq!(graph.number_of_nodes(), 5);
        assert_eq!(graph.vertices().collect_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(graph.number_of_edges(), 6);
        assert_eq!(graph.edges()[4], Edge(3, 4));

        let matrix = graph.adjacency_matrix();
        assert_eq!(matrix.entry(0, 1), 1);
        assert_eq!(matrix.entry(0, 4), 1);
        assert_eq!(matrix.entry(0, 3), 1);
        assert_eq!(matrix.entry(0, 2), 0);

        assert_eq!(
            graph.adjacency_list().neighborhood_of(0).as_slice(),
            &[1, 4, 3]
        );

        let incidence = graph.incidence_matrix();
        assert_eq!(incidence.number_of_edges(), 6);
        for k in 0..6 {
            let ones = graph.vertices().filter(|&u| incidence.entry(u, k) == 1).count();
            assert_eq!(ones, 2);
        }
    }

    #[test]
    fn self_loop() {
        let graph = build_graph([[0, 1], [1, 2], [2, 3], [3, 3]]).unwrap();

        assert_eq!(graph.adjacency_matrix().entry(3, 3), 1);
        assert!(graph.has_self_loop(3));

        let incidence = graph.incidence_matrix();
        assert_eq!(
            graph.vertices().map(|u| incidence.entry(u, 3)).collect_vec(),
            vec![0, 0, 0, 1]
        );

        let nbs = graph.adjacency_list().neighborhood_of(3);
        assert_eq!(nbs.iter().filter(|&v| v == 3).count(), 1);
        assert_eq!(nbs.as_slice(), &[2, 3]);
        assert_eq!(graph.degree_of(3), 2);
        assert_eq!(graph.number_of_self_loops(), 1);
        assert_eq!(graph.adjacency_list().count_edges(), 4);
    }

    #[test]
    fn duplicate_edge() {
        let graph = build_graph([[0, 1], [1, 0]]).unwrap();

        assert_eq!(graph.edges(), &[Edge(0, 1), Edge(0, 1)]);
        assert_eq!(graph.adjacency_list().neighborhood_of(0).as_slice(), &[1]);
        assert_eq!(graph.adjacency_matrix().number_of_edges(), 1);
        assert_eq!(
            graph.incidence_matrix().to_rows(),
            vec![vec![1, 1], vec![1, 1]]
        );
    }

    #[test]
    fn empty_input() {
        let edges: Vec<Edge> = Vec::new();
        assert!(matches!(
            build_graph(edges),
            Err(GraphError::InvalidInput(_))
        ));
    }

    #[test]
    fn sparse_labels() {
        assert_eq!(
            build_graph([(0, 1), (1, 3)]).unwrap_err(),
            GraphError::SparseVertexLabel {
                label: 3,
                num_nodes: 3
            }
        );

        let graph = GraphBuilder::new()
            .label_policy(LabelPolicy::Compact)
            .build([(0, 1), (3, 1)])
            .unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.edges(), &[Edge(0, 1), Edge(1, 2)]);
        assert_eq!(graph.vertex_index().slot_of(3), Some(2));
        assert!(graph.has_edge(2, 1));
    }

    #[test]
    fn representations_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 5, 20, 50] {
            for m in [n, n * 3] {
                let edges = random_dense_edges(rng, n, m as NumEdges);
                let graph = build_graph(edges.iter()).unwrap();

                let matrix = graph.adjacency_matrix();
                let list = graph.adjacency_list();
                let incidence = graph.incidence_matrix();

                assert_eq!(graph.number_of_nodes(), n);
                assert!(matrix.is_symmetric());
                assert_eq!(matrix.number_of_edges(), list.count_edges());
                assert_eq!(incidence.number_of_edges(), edges.len() as NumEdges);
                assert_eq!(matrix.digest_sha256(), list.digest_sha256());
                assert_eq!(matrix.digest_sha256(), incidence.digest_sha256());

                for u in graph.vertices() {
                    assert_eq!(list.neighbors_of_as_bitset(u), *matrix.row(u));
                    for v in graph.vertices() {
                        assert_eq!(matrix.entry(u, v), matrix.entry(v, u));
                    }
                }
            }
        }
    }
}
