//! BSP tree container and construction.

use crate::splitter::split;
use crate::{BspError, LineSide, Segment};

use super::node::BspNode;
use super::selector::{AxisAligned, PartitionSelector};
use super::visitor::{BspVisitor, CollectingVisitor};

/// Order in which a traversal emits each node's coincident segments
/// relative to its back ("behind") and front subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Node, then back subtree, then front subtree.
    PreOrder,
    /// Back subtree, then node, then front subtree.
    InOrder,
    /// Back subtree, then front subtree, then node.
    PostOrder,
}

/// A Binary Space Partitioning tree over 2D line segments.
///
/// BSP trees recursively partition the plane using lines drawn from the
/// input segments themselves. Each node holds the segments coincident with
/// its partition line, while segments in front of or behind the line are
/// stored in the respective child subtrees (split at the line where
/// necessary). The resulting structure yields occlusion-correct
/// back-to-front orderings for painter's-algorithm rendering.
///
/// # Construction
///
/// Trees are built from an ordered segment list using a
/// [`PartitionSelector`] to choose partition lines:
///
/// ```
/// use bsp2d::{BspTree, Segment};
///
/// let segments = vec![
///     Segment::from_coords(0.0, 0.0, 10.0, 0.0),
///     Segment::from_coords(5.0, -2.0, 5.0, 2.0),
/// ];
/// let tree = BspTree::from_segments(segments).unwrap();
/// assert_eq!(tree.segment_count(), 3); // the crossing segment was split
/// ```
///
/// Input order matters: it drives partition selection and therefore tree
/// shape, though never which geometry the tree covers.
///
/// # Traversal
///
/// The stored segments come back out through [`BspTree::traverse`] (with a
/// [`BspVisitor`]) or [`BspTree::segments_in_order`], in pre-, in-, or
/// post-order. Traversal is pure and restartable; repeated calls yield
/// identical sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BspTree {
    root: Option<BspNode>,
}

impl BspTree {
    /// Creates an empty BSP tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a BSP tree from an ordered list of segments.
    ///
    /// Uses the provided [`PartitionSelector`] to choose partition lines at
    /// every recursion level. Segments spanning a partition line are split
    /// at the intersection point; zero-length pieces produced by splitting
    /// exactly at an endpoint are discarded. Degenerate input segments are
    /// accepted and contribute no geometry.
    ///
    /// Returns an empty tree for empty input.
    ///
    /// # Errors
    ///
    /// Propagates [`BspError`] from splitting and abandons the whole
    /// build; no partial tree is returned.
    pub fn build<S: PartitionSelector>(
        segments: Vec<Segment>,
        selector: &S,
    ) -> Result<Self, BspError> {
        Ok(Self {
            root: build_node(segments, None, selector)?,
        })
    }

    /// Builds a BSP tree using the default partition selector
    /// ([`AxisAligned`]).
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self, BspError> {
        Self::build(segments, &AxisAligned)
    }

    /// Builds a BSP tree with an explicit partition index for the root
    /// level, overriding the selector there. Recursion below the root uses
    /// the selector as usual. Intended for deterministic tests.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds of `segments`.
    pub fn build_with_root_partition<S: PartitionSelector>(
        segments: Vec<Segment>,
        index: usize,
        selector: &S,
    ) -> Result<Self, BspError> {
        Ok(Self {
            root: build_node(segments, Some(index), selector)?,
        })
    }

    /// Returns `true` if the tree contains no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&BspNode> {
        self.root.as_ref()
    }

    /// Returns the total number of segments stored in the tree.
    ///
    /// This counts sub-segments after splitting, so it can exceed the
    /// input length.
    pub fn segment_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.segment_count())
    }

    /// Returns the maximum depth of the tree (0 for an empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    /// Traverses the tree in the given order.
    ///
    /// The visitor's `visit` method is called once for each node with a
    /// non-empty coincident list, in traversal order.
    pub fn traverse<V: BspVisitor>(&self, order: TraversalOrder, visitor: &mut V) {
        if let Some(ref root) = self.root {
            traverse_node(root, order, visitor);
        }
    }

    /// Collects the tree's segments as a flat sequence in the given order.
    ///
    /// The output is directly consumable by a serializer; no further
    /// geometric transformation is needed.
    pub fn segments_in_order(&self, order: TraversalOrder) -> Vec<Segment> {
        let mut visitor = CollectingVisitor::new();
        self.traverse(order, &mut visitor);
        visitor.into_segments()
    }
}

/// Recursively builds a BSP node from a list of segments.
///
/// `root_partition` forces the partition index at this level only.
fn build_node<S: PartitionSelector>(
    segments: Vec<Segment>,
    root_partition: Option<usize>,
    selector: &S,
) -> Result<Option<BspNode>, BspError> {
    let Some(partition_idx) = root_partition.or_else(|| selector.select(&segments)) else {
        return Ok(None);
    };
    let partition = segments[partition_idx].clone();

    let mut front = Vec::new();
    let mut back = Vec::new();
    let mut coincident = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        // The partition segment joins its own line unsplit. Identity is by
        // index: a duplicate elsewhere in the list is classified like any
        // other segment (and lands in `coincident` via OnLine anyway).
        if i == partition_idx {
            coincident.push(segment.clone());
            continue;
        }

        for (piece, side) in split(&partition, segment)? {
            if piece.is_degenerate() {
                continue;
            }
            match side {
                LineSide::Front => front.push(piece),
                LineSide::Behind => back.push(piece),
                LineSide::OnLine => coincident.push(piece),
            }
        }
    }

    // Each side receives at most one piece per input segment, so both
    // recursions operate on strictly fewer segments than this level.
    let mut node = BspNode::with_coincident(coincident);
    node.set_front(build_node(front, None, selector)?);
    node.set_back(build_node(back, None, selector)?);
    Ok(Some(node))
}

/// Traverses a node subtree in the given order.
fn traverse_node<V: BspVisitor>(node: &BspNode, order: TraversalOrder, visitor: &mut V) {
    match order {
        TraversalOrder::PreOrder => {
            visit_coincident(node, visitor);
            visit_child(node.back(), order, visitor);
            visit_child(node.front(), order, visitor);
        }
        TraversalOrder::InOrder => {
            visit_child(node.back(), order, visitor);
            visit_coincident(node, visitor);
            visit_child(node.front(), order, visitor);
        }
        TraversalOrder::PostOrder => {
            visit_child(node.back(), order, visitor);
            visit_child(node.front(), order, visitor);
            visit_coincident(node, visitor);
        }
    }
}

fn visit_coincident<V: BspVisitor>(node: &BspNode, visitor: &mut V) {
    if !node.coincident().is_empty() {
        visitor.visit(node.coincident());
    }
}

fn visit_child<V: BspVisitor>(child: Option<&BspNode>, order: TraversalOrder, visitor: &mut V) {
    if let Some(child) = child {
        traverse_node(child, order, visitor);
    }
}
