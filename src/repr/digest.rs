/*!
# Connectivity Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of a graph's connectivity that are independent of the
representation storing it.

The digest encodes:
- the number of nodes, and
- the sorted list of connected unordered pairs (each pair once),

before feeding them into a cryptographic hash function. Hence an adjacency matrix,
an adjacency list and an incidence matrix of the same graph share one digest; parallel
edges of an incidence matrix do not change it.

## Example
```
use graph_reprs::{prelude::*, repr::digest::GraphDigest};

let graph = build_graph([[0, 1], [1, 2], [1, 0]]).unwrap();

assert_eq!(
    graph.adjacency_matrix().digest_sha256(),
    graph.incidence_matrix().digest_sha256()
);
```
*/

use std::fmt::LowerHex;

use ::digest::{Digest, Output};

use super::*;

/// Trait for computing a **canonical hash digest** of a graph's connectivity.
///
/// Digests are designed to be:
/// - **Connectivity dependent**: two representations of the same graph yield the same digest.
/// - **Representation independent**: works with any [`AdjacencyList`] implementation.
/// - **Deterministic**: pairs are encoded in sorted order.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    ///
    /// # Type Parameters
    /// - `D`: A hash function implementing [`Digest`].
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        let mut buffer = [0u8; 8];

        let encode = |buf: &mut [u8], u: Node| {
            buf[..4].copy_from_slice(&u.to_le_bytes());
        };

        // first encode the number of nodes in the graph
        encode(&mut buffer[0..4], self.number_of_nodes());
        hasher.update(&buffer[0..4]);

        // then append the sorted list of pairs
        for Edge(u, v) in self.ordered_edges(true) {
            encode(&mut buffer[0..4], u);
            encode(&mut buffer[4..8], v);
            hasher.update(buffer);
        }

        format!("{:x}", hasher.finalize())
    }
}
