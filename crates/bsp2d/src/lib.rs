//! BSP (Binary Space Partitioning) tree over 2D line segments.

pub mod bsp;
mod error;
mod segment;
mod splitter;

pub use bsp::{
    AxisAligned, BspNode, BspTree, BspVisitor, CollectingVisitor, FirstSegment, FnVisitor,
    PartitionSelector, TraversalOrder,
};
pub use error::BspError;
pub use segment::{LineSide, Segment, SegmentClassification};
pub use splitter::split;
