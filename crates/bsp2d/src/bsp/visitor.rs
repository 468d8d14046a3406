//! Visitor pattern for BSP tree traversal.
//!
//! Visitors allow custom processing of segments during tree traversal
//! without coupling traversal logic to specific use cases.

use crate::Segment;

/// Visitor for processing segments during BSP tree traversal.
///
/// Implement this trait to define custom behavior when traversing the
/// tree. Common uses include:
/// - Rendering (painter's algorithm)
/// - Collecting segments in traversal order
/// - Serialization (SVG, debug dumps)
pub trait BspVisitor {
    /// Called for each group of coincident segments during traversal.
    ///
    /// The segments passed to a single call all lie on the same partition
    /// line and belong to the same BSP node.
    fn visit(&mut self, segments: &[Segment]);
}

/// A simple visitor that collects all visited segments.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Segment>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.collected
    }

    /// Returns a reference to the collected segments.
    pub fn segments(&self) -> &[Segment] {
        &self.collected
    }
}

impl BspVisitor for CollectingVisitor {
    fn visit(&mut self, segments: &[Segment]) {
        self.collected.extend(segments.iter().cloned());
    }
}

/// A visitor that calls a closure for each segment group.
pub struct FnVisitor<F>
where
    F: FnMut(&[Segment]),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&[Segment]),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> BspVisitor for FnVisitor<F>
where
    F: FnMut(&[Segment]),
{
    fn visit(&mut self, segments: &[Segment]) {
        (self.func)(segments);
    }
}
