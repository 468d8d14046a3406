//! Binary Space Partitioning tree for 2D segment management.
//!
//! This module provides a BSP tree implementation that recursively
//! partitions the plane using lines drawn from the input segments. The
//! tree enables:
//!
//! - Occlusion-correct back-to-front (or front-to-back) segment ordering
//!   for painter's-algorithm rendering
//! - Flat, order-respecting traversal output for serializers
//!
//! # Example
//!
//! ```
//! use bsp2d::{BspTree, CollectingVisitor, Segment, TraversalOrder};
//!
//! let segments = vec![
//!     Segment::from_coords(0.0, 0.0, 10.0, 0.0),
//!     Segment::from_coords(2.0, 1.0, 8.0, 1.0),
//! ];
//! let tree = BspTree::from_segments(segments).unwrap();
//!
//! let mut visitor = CollectingVisitor::new();
//! tree.traverse(TraversalOrder::InOrder, &mut visitor);
//! assert_eq!(visitor.segments().len(), 2);
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: The main container holding the root node
//! - [`BspNode`]: Nodes storing coincident segments and owned subtrees
//! - [`PartitionSelector`]: Strategy trait for choosing partition lines
//! - [`BspVisitor`]: Visitor trait for custom traversal behavior

mod node;
mod selector;
mod tree;
mod visitor;

// Re-export main types
pub use node::BspNode;
pub use selector::{AxisAligned, FirstSegment, PartitionSelector};
pub use tree::{BspTree, TraversalOrder};
pub use visitor::{BspVisitor, CollectingVisitor, FnVisitor};
