/*!
# Node Representation

We choose `Node = u32` as graphs handled here rarely exceed `2^32` nodes.
Nodes are plain integers in `0..n`, so they double as row indices into every matrix representation.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes. Used as the row type of an adjacency matrix.
pub type NodeBitSet = BitSetImpl<Node>;
