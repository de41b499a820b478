/*!
# Vertex Index

Maps vertex labels as they appear in a raw edge list to slots (rows/columns) of the
matrix representations. Every positional write performed while building a graph goes
through a [`VertexIndex`], so labels outside of `0..n` surface as
[`GraphError::SparseVertexLabel`] instead of an out-of-bounds write.
*/

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{
    edge::*,
    error::{GraphError, Result},
    node::*,
};

/// How labels of a raw edge list are turned into slots
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum LabelPolicy {
    /// Labels must be exactly `0..n` where `n` is the number of distinct labels.
    /// Every label is its own slot.
    #[default]
    Dense,
    /// Distinct labels are sorted and label `i` in that order gets slot `i`.
    Compact,
}

/// Bijection between vertex labels and slots `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexIndex {
    /// Each label `0..n` is its own slot
    Identity(NumNodes),
    /// Explicit mapping; `labels[slot]` stores the label of `slot`
    Relabelled {
        labels: Vec<Node>,
        slots: FxHashMap<Node, Node>,
    },
}

impl VertexIndex {
    /// Builds an index over all endpoints of `edges` following `policy`.
    ///
    /// # Errors
    /// With [`LabelPolicy::Dense`], returns [`GraphError::SparseVertexLabel`] for the
    /// largest label that is not smaller than the number of distinct labels.
    ///
    /// # Example
    /// ```
    /// use graph_reprs::{prelude::*, utils::*};
    ///
    /// let edges = [Edge(10, 30), Edge(30, 20)];
    /// assert!(VertexIndex::from_edges(&edges, LabelPolicy::Dense).is_err());
    ///
    /// let index = VertexIndex::from_edges(&edges, LabelPolicy::Compact).unwrap();
    /// assert_eq!(index.slot_of(20), Some(1));
    /// assert_eq!(index.label_of(2), Some(30));
    /// ```
    pub fn from_edges(edges: &[Edge], policy: LabelPolicy) -> Result<Self> {
        let labels = edges
            .iter()
            .flat_map(|&Edge(u, v)| [u, v])
            .sorted_unstable()
            .dedup()
            .collect_vec();
        let n = labels.len() as NumNodes;

        match policy {
            LabelPolicy::Dense => {
                // sorted and distinct, so dense iff the largest label is `n - 1`
                if let Some(&label) = labels.last().filter(|&&max| max >= n) {
                    return Err(GraphError::SparseVertexLabel {
                        label,
                        num_nodes: n,
                    });
                }
                Ok(VertexIndex::Identity(n))
            }
            LabelPolicy::Compact => {
                if labels.iter().enumerate().all(|(i, &u)| i as Node == u) {
                    return Ok(VertexIndex::Identity(n));
                }

                let slots = labels
                    .iter()
                    .enumerate()
                    .map(|(slot, &label)| (label, slot as Node))
                    .collect();
                Ok(VertexIndex::Relabelled { labels, slots })
            }
        }
    }

    /// Returns the number of slots
    pub fn number_of_nodes(&self) -> NumNodes {
        match self {
            VertexIndex::Identity(n) => *n,
            VertexIndex::Relabelled { labels, .. } => labels.len() as NumNodes,
        }
    }

    /// Returns *true* if every label is its own slot
    pub fn is_identity(&self) -> bool {
        matches!(self, VertexIndex::Identity(_))
    }

    /// Returns the slot of `label` if it is known
    pub fn slot_of(&self, label: Node) -> Option<Node> {
        match self {
            VertexIndex::Identity(n) => (label < *n).then_some(label),
            VertexIndex::Relabelled { slots, .. } => slots.get(&label).copied(),
        }
    }

    /// Returns the label stored at `slot` if `slot < n`
    pub fn label_of(&self, slot: Node) -> Option<Node> {
        match self {
            VertexIndex::Identity(n) => (slot < *n).then_some(slot),
            VertexIndex::Relabelled { labels, .. } => labels.get(slot as usize).copied(),
        }
    }

    /// Maps both endpoints of a label-edge onto slots.
    ///
    /// # Errors
    /// Returns [`GraphError::SparseVertexLabel`] if an endpoint has no slot.
    pub fn map_edge(&self, Edge(u, v): Edge) -> Result<Edge> {
        let slot = |label| {
            self.slot_of(label).ok_or(GraphError::SparseVertexLabel {
                label,
                num_nodes: self.number_of_nodes(),
            })
        };
        Ok(Edge(slot(u)?, slot(v)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_labels_map_to_themselves() {
        let edges = [Edge(0, 1), Edge(2, 1), Edge(2, 2)];
        for policy in [LabelPolicy::Dense, LabelPolicy::Compact] {
            let index = VertexIndex::from_edges(&edges, policy).unwrap();
            assert!(index.is_identity());
            assert_eq!(index.number_of_nodes(), 3);
            assert_eq!(index.slot_of(2), Some(2));
            assert_eq!(index.slot_of(3), None);
            assert_eq!(index.label_of(3), None);
            assert_eq!(index.map_edge(Edge(2, 0)), Ok(Edge(2, 0)));
        }
    }

    #[test]
    fn sparse_labels_are_rejected() {
        let edges = [Edge(0, 1), Edge(1, 5)];
        assert_eq!(
            VertexIndex::from_edges(&edges, LabelPolicy::Dense),
            Err(GraphError::SparseVertexLabel {
                label: 5,
                num_nodes: 3
            })
        );
    }

    #[test]
    fn compact_relabelling() {
        let edges = [Edge(7, 3), Edge(3, 3), Edge(9, 7)];
        let index = VertexIndex::from_edges(&edges, LabelPolicy::Compact).unwrap();

        assert!(!index.is_identity());
        assert_eq!(index.number_of_nodes(), 3);
        assert_eq!(
            (0..3).map(|s| index.label_of(s).unwrap()).collect_vec(),
            vec![3, 7, 9]
        );
        assert_eq!(index.map_edge(Edge(9, 3)), Ok(Edge(2, 0)));
        assert_eq!(
            index.map_edge(Edge(9, 4)),
            Err(GraphError::SparseVertexLabel {
                label: 4,
                num_nodes: 3
            })
        );
    }
}
