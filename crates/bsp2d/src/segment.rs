//! Line segment representation and the geometric predicates used by BSP construction.

use std::fmt;

use nalgebra::{Point2, Vector2};

/// Which side of a directed line a point lies on.
///
/// The line is directed from the owning segment's first endpoint toward its
/// second. `Front` is the left half-plane of that direction, so reversing
/// the segment swaps `Front` and `Behind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSide {
    /// Point is in front of the line (left of the direction vector).
    Front,
    /// Point is behind the line (right of the direction vector).
    Behind,
    /// Point lies exactly on the line.
    OnLine,
}

/// Classification of a whole segment relative to a directed partition line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentClassification {
    /// Both endpoints are in front of the line.
    Front,
    /// Both endpoints are behind the line.
    Behind,
    /// Both endpoints lie on the line.
    Coincident,
    /// The endpoints classify to different sides (the segment must be split).
    Spanning,
}

/// A line segment in the plane, defined by an ordered pair of endpoints.
///
/// Equality is exact, ordered coordinate equality: `(a, b)` and `(b, a)` are
/// different segments, and no epsilon is applied. When a segment acts as a
/// partition line it stands for the infinite line through its endpoints,
/// directed from `a` to `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    a: Point2<f64>,
    b: Point2<f64>,
}

impl Segment {
    /// Creates a new segment from two endpoints.
    ///
    /// Zero-length segments (`a == b`) are representable; they classify as
    /// degenerate and contribute no geometry to a built tree.
    pub fn new(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self { a, b }
    }

    /// Creates a segment from raw coordinates `(x1, y1)-(x2, y2)`.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Returns the first endpoint.
    #[inline]
    pub fn a(&self) -> Point2<f64> {
        self.a
    }

    /// Returns the second endpoint.
    #[inline]
    pub fn b(&self) -> Point2<f64> {
        self.b
    }

    /// Returns the direction vector `b - a`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.b - self.a
    }

    /// Returns the Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns `true` if both endpoints are identical (zero length).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Returns `true` if both endpoints share an x-coordinate.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.a.x == self.b.x
    }

    /// Returns `true` if both endpoints share a y-coordinate.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.a.y == self.b.y
    }

    /// Returns `true` if the segment is vertical or horizontal.
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        self.is_vertical() || self.is_horizontal()
    }

    /// Returns the slope of the line through the segment, or `None` if the
    /// segment is vertical (including zero-length segments, whose slope is
    /// ambiguous).
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some((self.a.y - self.b.y) / (self.a.x - self.b.x))
        }
    }

    /// Returns the segment with its endpoints swapped (direction flipped).
    ///
    /// Reversal swaps the `Front` and `Behind` half-planes of every point
    /// not on the line.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Classifies which side of the directed line through this segment a
    /// point lies on. Exact comparison, no tolerance.
    ///
    /// The predicate is the sign of the 2D cross product
    /// `(b - a) × (p - a)`: positive means `p` is left of the direction
    /// vector (`Front`), negative means right (`Behind`), exactly zero
    /// means on the line. The same formula covers vertical and non-vertical
    /// lines; for an upward vertical line, smaller x is `Front`.
    #[inline]
    pub fn side_of(&self, point: Point2<f64>) -> LineSide {
        self.side_of_with_epsilon(point, 0.0)
    }

    /// Classifies which side of the line a point lies on, treating points
    /// within `epsilon` (in cross-product units) as on the line.
    pub fn side_of_with_epsilon(&self, point: Point2<f64>, epsilon: f64) -> LineSide {
        let d = self.direction();
        let cross = d.x * (point.y - self.a.y) - d.y * (point.x - self.a.x);
        if cross > epsilon {
            LineSide::Front
        } else if cross < -epsilon {
            LineSide::Behind
        } else {
            LineSide::OnLine
        }
    }

    /// Classifies this segment relative to the directed line through
    /// `partition`.
    ///
    /// The segment is `Spanning` whenever its endpoints classify to
    /// different sides, including one endpoint exactly on the line.
    pub fn classify(&self, partition: &Segment) -> SegmentClassification {
        match (partition.side_of(self.a), partition.side_of(self.b)) {
            (LineSide::Front, LineSide::Front) => SegmentClassification::Front,
            (LineSide::Behind, LineSide::Behind) => SegmentClassification::Behind,
            (LineSide::OnLine, LineSide::OnLine) => SegmentClassification::Coincident,
            _ => SegmentClassification::Spanning,
        }
    }

    /// Computes the intersection of the infinite lines through `self` and
    /// `other` via the standard determinant method.
    ///
    /// Returns `None` when the determinant is exactly zero (parallel or
    /// coincident lines, or a degenerate operand). The result is not
    /// clamped to either segment.
    pub fn line_intersection(&self, other: &Segment) -> Option<Point2<f64>> {
        let (x1, y1) = (self.a.x, self.a.y);
        let (x2, y2) = (self.b.x, self.b.y);
        let (x3, y3) = (other.a.x, other.a.y);
        let (x4, y4) = (other.b.x, other.b.y);

        let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if denom == 0.0 {
            return None;
        }

        let det_self = x1 * y2 - y1 * x2;
        let det_other = x3 * y4 - y3 * x4;
        let x = (det_self * (x3 - x4) - (x1 - x2) * det_other) / denom;
        let y = (det_self * (y3 - y4) - (y1 - y2) * det_other) / denom;
        Some(Point2::new(x, y))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.a.x, self.a.y, self.b.x, self.b.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_predicates() {
        let vertical = Segment::from_coords(2.0, 0.0, 2.0, 5.0);
        let horizontal = Segment::from_coords(0.0, 3.0, 7.0, 3.0);
        let diagonal = Segment::from_coords(0.0, 0.0, 1.0, 1.0);

        assert!(vertical.is_vertical());
        assert!(!vertical.is_horizontal());
        assert!(vertical.is_axis_aligned());

        assert!(horizontal.is_horizontal());
        assert!(!horizontal.is_vertical());
        assert!(horizontal.is_axis_aligned());

        assert!(!diagonal.is_axis_aligned());
    }

    #[test]
    fn slope_of_vertical_is_none() {
        let vertical = Segment::from_coords(2.0, 0.0, 2.0, 5.0);
        assert_eq!(vertical.slope(), None);

        let degenerate = Segment::from_coords(1.0, 1.0, 1.0, 1.0);
        assert_eq!(degenerate.slope(), None);
    }

    #[test]
    fn slope_values() {
        let horizontal = Segment::from_coords(0.0, 3.0, 7.0, 3.0);
        assert_eq!(horizontal.slope(), Some(0.0));

        let diagonal = Segment::from_coords(0.0, 0.0, 2.0, 1.0);
        assert_eq!(diagonal.slope(), Some(0.5));

        // Slope does not depend on endpoint order.
        assert_eq!(diagonal.reversed().slope(), Some(0.5));
    }

    #[test]
    fn side_of_horizontal_line() {
        // Directed left-to-right along y = 0: above is Front, below is Behind.
        let line = Segment::from_coords(0.0, 0.0, 10.0, 0.0);

        assert_eq!(line.side_of(Point2::new(5.0, 1.0)), LineSide::Front);
        assert_eq!(line.side_of(Point2::new(5.0, -1.0)), LineSide::Behind);
        assert_eq!(line.side_of(Point2::new(3.0, 0.0)), LineSide::OnLine);
        // Collinear points beyond the endpoints are still on the line.
        assert_eq!(line.side_of(Point2::new(-20.0, 0.0)), LineSide::OnLine);
    }

    #[test]
    fn side_of_vertical_line() {
        // Directed upward along x = 2: smaller x is Front.
        let line = Segment::from_coords(2.0, 0.0, 2.0, 5.0);

        assert_eq!(line.side_of(Point2::new(1.0, 3.0)), LineSide::Front);
        assert_eq!(line.side_of(Point2::new(3.0, 3.0)), LineSide::Behind);
        assert_eq!(line.side_of(Point2::new(2.0, -4.0)), LineSide::OnLine);
    }

    #[test]
    fn side_of_swap_symmetry() {
        let line = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let reversed = line.reversed();
        let above = Point2::new(4.0, 2.0);
        let below = Point2::new(4.0, -2.0);
        let on = Point2::new(4.0, 0.0);

        assert_eq!(line.side_of(above), LineSide::Front);
        assert_eq!(reversed.side_of(above), LineSide::Behind);
        assert_eq!(line.side_of(below), LineSide::Behind);
        assert_eq!(reversed.side_of(below), LineSide::Front);
        assert_eq!(reversed.side_of(on), LineSide::OnLine);
    }

    #[test]
    fn side_of_with_epsilon_widens_the_line() {
        let line = Segment::from_coords(0.0, 0.0, 1.0, 0.0);
        let near = Point2::new(0.5, 1e-9);

        assert_eq!(line.side_of(near), LineSide::Front);
        assert_eq!(line.side_of_with_epsilon(near, 1e-6), LineSide::OnLine);
    }

    #[test]
    fn classify_relative_to_partition() {
        let partition = Segment::from_coords(0.0, 0.0, 10.0, 0.0);

        let above = Segment::from_coords(1.0, 1.0, 2.0, 3.0);
        assert_eq!(above.classify(&partition), SegmentClassification::Front);

        let below = Segment::from_coords(1.0, -1.0, 2.0, -3.0);
        assert_eq!(below.classify(&partition), SegmentClassification::Behind);

        let on = Segment::from_coords(2.0, 0.0, 8.0, 0.0);
        assert_eq!(on.classify(&partition), SegmentClassification::Coincident);

        let crossing = Segment::from_coords(5.0, -2.0, 5.0, 2.0);
        assert_eq!(crossing.classify(&partition), SegmentClassification::Spanning);

        // An endpoint exactly on the line counts as Spanning.
        let touching = Segment::from_coords(5.0, 0.0, 5.0, 2.0);
        assert_eq!(touching.classify(&partition), SegmentClassification::Spanning);
    }

    #[test]
    fn line_intersection_crossing() {
        let horizontal = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let vertical = Segment::from_coords(1.0, 0.0, 1.0, 9.0);

        let point = horizontal.line_intersection(&vertical).unwrap();
        assert_eq!(point, Point2::new(1.0, 0.0));
    }

    #[test]
    fn line_intersection_extends_beyond_segments() {
        // The infinite lines cross even though the segments do not.
        let a = Segment::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Segment::from_coords(5.0, 1.0, 5.0, 2.0);

        let point = a.line_intersection(&b).unwrap();
        assert_eq!(point, Point2::new(5.0, 0.0));
    }

    #[test]
    fn line_intersection_parallel_is_none() {
        let a = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let b = Segment::from_coords(0.0, 1.0, 10.0, 1.0);
        assert_eq!(a.line_intersection(&b), None);

        // Coincident lines have a zero determinant too.
        let c = Segment::from_coords(2.0, 0.0, 8.0, 0.0);
        assert_eq!(a.line_intersection(&c), None);

        // A degenerate operand has no direction to intersect along.
        let degenerate = Segment::from_coords(3.0, 3.0, 3.0, 3.0);
        assert_eq!(a.line_intersection(&degenerate), None);
    }

    #[test]
    fn exact_ordered_equality() {
        let s = Segment::from_coords(0.0, 0.0, 1.0, 1.0);
        assert_eq!(s, Segment::from_coords(0.0, 0.0, 1.0, 1.0));
        assert_ne!(s, s.reversed());
    }

    #[test]
    fn display_format() {
        let s = Segment::from_coords(0.0, 0.5, 10.0, 2.0);
        assert_eq!(s.to_string(), "(0, 0.5)-(10, 2)");
    }
}
