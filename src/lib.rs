/*!
`graph_reprs` builds and converts the canonical representations of graphs that are
- **undirected**: `Edge(u, v)` and `Edge(v, u)` describe the same connection (edges are normalized to `u <= v`),
- **unweighted**: neither nodes nor edges carry a weight,
- **unlabelled**: nodes are numbered `0` to `n - 1`.

Self-loops are allowed. Parallel edges are kept where a representation can express them.

# Representation

We represent **nodes** as `u32` in the range `0..n` and **edges** as the tuple-struct `Edge(Node, Node)`.
A [`Graph`](crate::graph::Graph) is built once from an edge list and then holds, read-only,

- its normalized edge list,
- an [`AdjMatrix`](crate::repr::AdjMatrix): `n × n`, symmetric, binary,
- an [`AdjList`](crate::repr::AdjList): one insertion-ordered, duplicate-free neighborhood per node,
- an [`IncidenceMatrix`](crate::repr::IncidenceMatrix): `n × m`, one column per edge.

All representations agree on which unordered pairs of nodes are connected; only the edge list and the
incidence matrix keep the multiplicity of parallel edges.

# Usage

- [`graph`] contains the [`GraphBuilder`](crate::graph::GraphBuilder) and the [`Graph`](crate::graph::Graph) aggregate,
- [`convert`] derives one representation directly from another,
- [`repr`] contains the representations and representation independent [digests](crate::repr::digest),
- [`io`] reads raw edge lists and writes representations as text,
- [`utils`] provides the ordered neighborhood set and the label-to-node mapping.

In most use-cases, `use graph_reprs::prelude::*;` suffices.

```
use graph_reprs::prelude::*;

let graph = build_graph([[0, 1], [1, 2], [2, 4], [0, 4], [4, 3], [3, 0]]).unwrap();
assert_eq!(graph.number_of_nodes(), 5);
assert_eq!(graph.adjacency_list().neighborhood_of(0).as_slice(), &[1, 4, 3]);

let list = incidence_to_adjacency_list(graph.incidence_matrix()).unwrap();
assert!(list.same_connectivity(graph.adjacency_list()));
```

# Logging

Building and converting emit [`tracing`] events at `debug` (summaries) and `trace` (edge lists) level.
The crate never installs a subscriber.
*/

pub mod convert;
pub mod edge;
pub mod error;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `graph_reprs::prelude` includes definitions for nodes and edges, all basic graph operation traits,
/// all representations, the builder and the converters.
pub mod prelude {
    pub use super::{
        convert::*,
        edge::*,
        error::{GraphError, Result},
        graph::*,
        node::*,
        ops::*,
        repr::*,
    };
}
