//! Segment splitting against a partition line.

use crate::{BspError, LineSide, Segment, SegmentClassification};

/// Splits `segment` by the infinite directed line through `partition`.
///
/// Returns each resulting piece tagged with the side of the partition line
/// it lies on:
///
/// - **Front / Behind / Coincident**: the segment is returned whole, as a
///   single tagged piece.
/// - **Spanning**: two pieces, `(a, intersection)` tagged with `a`'s side
///   and `(intersection, b)` tagged with `b`'s side. When one endpoint lies
///   exactly on the line, one of the pieces is zero-length; callers decide
///   whether to keep such pieces (the tree builder drops them).
///
/// # Errors
///
/// A spanning segment whose line has a zero determinant against the
/// partition line cannot be split; this indicates inconsistent
/// classification and returns [`BspError::ParallelSplit`].
pub fn split(
    partition: &Segment,
    segment: &Segment,
) -> Result<Vec<(Segment, LineSide)>, BspError> {
    match segment.classify(partition) {
        SegmentClassification::Front => Ok(vec![(segment.clone(), LineSide::Front)]),
        SegmentClassification::Behind => Ok(vec![(segment.clone(), LineSide::Behind)]),
        SegmentClassification::Coincident => Ok(vec![(segment.clone(), LineSide::OnLine)]),
        SegmentClassification::Spanning => {
            let side_a = partition.side_of(segment.a());
            let side_b = partition.side_of(segment.b());
            split_spanning(partition, segment, side_a, side_b)
        }
    }
}

/// Cuts a segment whose endpoints classify to different sides.
///
/// Split out from [`split`] so the parallel contract violation can be
/// exercised directly: differing endpoint sides promise an intersection,
/// and its absence aborts the build rather than producing a tree that
/// silently drops or misplaces geometry.
fn split_spanning(
    partition: &Segment,
    segment: &Segment,
    side_a: LineSide,
    side_b: LineSide,
) -> Result<Vec<(Segment, LineSide)>, BspError> {
    let intersection =
        partition
            .line_intersection(segment)
            .ok_or_else(|| BspError::ParallelSplit {
                partition: partition.clone(),
                segment: segment.clone(),
            })?;

    Ok(vec![
        (Segment::new(segment.a(), intersection), side_a),
        (Segment::new(intersection, segment.b()), side_b),
    ])
}
