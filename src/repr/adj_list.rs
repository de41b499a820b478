use itertools::Itertools;

use super::*;
use crate::utils::OrderedSet;

/// Representation using an Adjacency-List.
///
/// Each node owns an [`OrderedSet`] of neighbors in the order in which the connecting
/// edges were first seen. Repeated edges between the same two nodes contribute a single entry,
/// a self-loop `(u, u)` stores `u` once in its own neighborhood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList {
    nbs: Vec<OrderedSet<Node>>,
}

impl AdjList {
    /// Creates `n` empty neighborhoods
    pub(crate) fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![OrderedSet::new(); n as usize],
        }
    }

    /// Creates the list of `n` nodes from edges whose endpoints are all in `0..n`
    pub(crate) fn from_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut list = Self::new(n);
        for edge in edges {
            list.add_edge(edge);
        }
        list
    }

    /// Appends `v` to the neighborhood of `u` and `u` to that of `v`, each only if absent
    pub(crate) fn add_edge(&mut self, Edge(u, v): Edge) {
        self.nbs[u as usize].append(v);
        self.nbs[v as usize].append(u);
    }

    /// Appends `v` to the neighborhood of `u` only.
    /// Returns *false* if `v` was already present.
    pub(crate) fn append_neighbor(&mut self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].append(v)
    }

    /// Creates an adjacency list from raw neighborhoods.
    /// Repeated entries within one neighborhood are dropped.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidRepresentation`](crate::error::GraphError::InvalidRepresentation)
    /// if there are no neighborhoods, a neighbor is outside of `0..n`, or `v` is a neighbor of
    /// `u` without `u` being a neighbor of `v`.
    ///
    /// # Example
    /// ```
    /// use graph_reprs::prelude::*;
    ///
    /// let list = AdjList::try_from_neighborhoods(&[vec![1, 2], vec![0], vec![0, 2]]).unwrap();
    /// assert_eq!(list.count_edges(), 3);
    ///
    /// assert!(AdjList::try_from_neighborhoods(&[vec![1], vec![]]).is_err());
    /// ```
    pub fn try_from_neighborhoods<N: AsRef<[Node]>>(nbs: &[N]) -> Result<Self> {
        let n = nbs.len();
        invalid_unless!(n > 0, "adjacency list has no neighborhoods");

        let mut list = Self::new(n as NumNodes);
        for (u, neighbors) in nbs.iter().enumerate() {
            for &v in neighbors.as_ref() {
                invalid_unless!(
                    (v as usize) < n,
                    "neighbor {v} of node {u} is not in 0..{n}"
                );
                list.append_neighbor(u as Node, v);
            }
        }

        for u in list.vertices() {
            for v in list.neighbors_of(u) {
                invalid_unless!(
                    list.has_edge(v, u),
                    "node {v} is a neighbor of {u} but not vice versa"
                );
            }
        }

        Ok(list)
    }

    /// Returns the neighborhood of `u`
    /// ** Panics if `u >= n` **
    pub fn neighborhood_of(&self, u: Node) -> &OrderedSet<Node> {
        &self.nbs[u as usize]
    }

    /// Returns all neighborhoods, indexed by node
    pub fn neighborhoods(&self) -> &[OrderedSet<Node>] {
        &self.nbs
    }

    /// Counts the edges stored in the list.
    ///
    /// A neighbor equal to its own node is a self-loop and counts once; every other entry
    /// is one half of an edge stored in both endpoints' neighborhoods.
    pub fn count_edges(&self) -> NumEdges {
        let (self_loops, ordinary) = self.edges(false).fold((0, 0), |(loops, other), edge| {
            if edge.is_loop() {
                (loops + 1, other)
            } else {
                (loops, other + 1)
            }
        });

        self_loops + ordinary / 2
    }

    /// Recovers one normalized edge per unordered pair.
    ///
    /// Node `u` emits `Edge(u, v)` for each neighbor `v >= u` in neighborhood order, so the
    /// edges come out grouped by their smaller endpoint.
    pub fn reconstruct_edges(&self) -> Vec<Edge> {
        self.edges(true).collect_vec()
    }

    /// Returns *true* if both lists connect the same unordered pairs,
    /// regardless of the order within neighborhoods
    pub fn same_connectivity(&self, other: &Self) -> bool {
        self.nbs.len() == other.nbs.len()
            && self
                .nbs
                .iter()
                .zip(&other.nbs)
                .all(|(a, b)| a.same_elements(b))
    }

    /// Exports the neighborhoods as raw vectors
    pub fn to_vecs(&self) -> Vec<Vec<Node>> {
        self.nbs.iter().map(|nbs| nbs.iter().collect()).collect()
    }
}

impl GraphNodeOrder for AdjList {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjList {
    fn number_of_edges(&self) -> NumEdges {
        self.count_edges()
    }
}

impl AdjacencyList for AdjList {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjList {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].contains(&v)
    }
}
