//! Spatial partition of the field.

mod quadtree;

pub use quadtree::{QuadTree, QuadTreeNode, ROOT};
