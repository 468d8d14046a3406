//! BSP tree node implementation.

use crate::Segment;

/// A node in the BSP tree.
///
/// Each node stores the segments that lie exactly on its (virtual)
/// partition line and owns up to two children: `front` holds everything
/// strictly in front of the line, `back` everything strictly behind it.
/// The partition line itself is not stored; after construction it is only
/// implied by the node's coincident segments.
#[derive(Debug, Clone, PartialEq)]
pub struct BspNode {
    /// Segments lying exactly on this node's partition line.
    coincident: Vec<Segment>,

    /// Subtree of segments in front of the partition line.
    front: Option<Box<BspNode>>,

    /// Subtree of segments behind the partition line.
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a new node with no coincident segments and no children.
    pub fn new() -> Self {
        Self {
            coincident: Vec::new(),
            front: None,
            back: None,
        }
    }

    /// Creates a new childless node holding the given coincident segments.
    pub fn with_coincident(coincident: Vec<Segment>) -> Self {
        Self {
            coincident,
            front: None,
            back: None,
        }
    }

    /// Returns the segments lying on this node's partition line.
    #[inline]
    pub fn coincident(&self) -> &[Segment] {
        &self.coincident
    }

    /// Returns a reference to the front child subtree.
    #[inline]
    pub fn front(&self) -> Option<&BspNode> {
        self.front.as_deref()
    }

    /// Returns a reference to the back child subtree.
    #[inline]
    pub fn back(&self) -> Option<&BspNode> {
        self.back.as_deref()
    }

    /// Sets the front child subtree.
    #[inline]
    pub fn set_front(&mut self, node: Option<BspNode>) {
        self.front = node.map(Box::new);
    }

    /// Sets the back child subtree.
    #[inline]
    pub fn set_back(&mut self, node: Option<BspNode>) {
        self.back = node.map(Box::new);
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Returns the total number of segments in this subtree (including all
    /// descendants).
    pub fn segment_count(&self) -> usize {
        let mut count = self.coincident.len();

        if let Some(ref front) = self.front {
            count += front.segment_count();
        }
        if let Some(ref back) = self.back {
            count += back.segment_count();
        }

        count
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let front_depth = self.front.as_ref().map_or(0, |n| n.depth());
        let back_depth = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front_depth.max(back_depth)
    }
}

impl Default for BspNode {
    fn default() -> Self {
        Self::new()
    }
}
