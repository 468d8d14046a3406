//! Error types for BSP tree construction.

use thiserror::Error;

use crate::Segment;

/// Errors that abort BSP tree construction.
///
/// Construction is pure and deterministic, so no failure here is
/// retryable: the same input reproduces the same error. A partial tree is
/// never returned, because it would cover a different point-set than the
/// input without any caller-visible signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BspError {
    /// A segment's endpoints classified to different sides of a partition
    /// line, yet the two lines have a zero determinant (parallel), so the
    /// split point the classification promised does not exist.
    #[error("segment {segment} spans partition line {partition}, but the lines are parallel")]
    ParallelSplit {
        /// The partition line in effect at the failing recursion level.
        partition: Segment,
        /// The segment that could not be split.
        segment: Segment,
    },
}
