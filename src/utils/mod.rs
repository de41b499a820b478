/*!
# Utilities

Provides the helper containers the representations are built from:
- the [`Set`] abstraction over duplicate-free collections,
- [`OrderedSet`], the insertion-ordered, duplicate-free sequence backing every adjacency-list neighborhood,
- [`VertexIndex`], the explicit mapping from vertex labels to matrix slots.
*/

pub mod ordered_set;
pub mod set;
pub mod vertex_index;

pub use ordered_set::OrderedSet;
pub use set::Set;
pub use vertex_index::{LabelPolicy, VertexIndex};
