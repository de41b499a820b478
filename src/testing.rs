//! Helpers shared by the randomized tests of several modules.

use itertools::Itertools;
use rand::Rng;

use crate::{edge::*, node::*};

/// Creates `n + m` random edges over nodes `0..n` in which every node appears.
/// Self-loops and parallel edges are likely for small `n`.
pub(crate) fn random_dense_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
    let covering = (0..n).map(|u| Edge(u, rng.random_range(0..n))).collect_vec();
    let random = (0..m)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec();

    covering.into_iter().chain(random).collect()
}

/// Creates raw neighborhoods of `n` nodes describing a random simple graph where each
/// node has at most one self-loop.
pub(crate) fn random_neighborhoods<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Vec<Vec<Node>> {
    let mut nbs = vec![Vec::new(); n as usize];
    for u in 0..n {
        for v in u..n {
            if rng.random_bool(p) {
                nbs[u as usize].push(v);
                if u != v {
                    nbs[v as usize].push(u);
                }
            }
        }
    }
    nbs.iter_mut().for_each(|nb| {
        if nb.len() > 1 {
            let i = rng.random_range(0..nb.len());
            nb.swap(0, i);
        }
    });
    nbs
}
