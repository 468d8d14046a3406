//! Partition selection strategies for BSP tree construction.
//!
//! The choice of partition line affects tree balance and the number of
//! segment splits during construction. Different strategies offer
//! different trade-offs between build time and tree quality.

use crate::Segment;

/// Strategy for selecting which segment's line to partition with.
///
/// The selected segment's infinite line becomes the partition line for a
/// BSP node. Different strategies can optimize for:
/// - Build speed (simple selection)
/// - Tree balance (minimize depth)
/// - Numeric robustness (prefer lines with exact arithmetic)
pub trait PartitionSelector {
    /// Selects the index of the segment to partition with.
    ///
    /// Returns `None` if the slice is empty. The returned index must be in
    /// bounds for the provided slice.
    fn select(&self, segments: &[Segment]) -> Option<usize>;
}

/// Selects the first axis-aligned segment, falling back to index 0.
///
/// Axis-aligned partition lines keep subsequent classification arithmetic
/// exact (the cross product reduces to a single coordinate difference),
/// which limits numeric drift across recursion depth. Degenerate
/// zero-length segments are skipped during the scan; one only becomes the
/// partition via the index-0 fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisAligned;

impl PartitionSelector for AxisAligned {
    fn select(&self, segments: &[Segment]) -> Option<usize> {
        if segments.is_empty() {
            return None;
        }
        let axial = segments
            .iter()
            .position(|s| !s.is_degenerate() && s.is_axis_aligned());
        Some(axial.unwrap_or(0))
    }
}

/// Selects the first segment in the list.
///
/// This is the simplest and fastest selector, but may produce unbalanced
/// trees and more splits depending on input order. Useful when tests need
/// a fully predictable partition sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSegment;

impl PartitionSelector for FirstSegment {
    fn select(&self, segments: &[Segment]) -> Option<usize> {
        if segments.is_empty() { None } else { Some(0) }
    }
}
