use tracing::debug;
use tracing::trace;

use crate::aabb::Aabb;
use crate::point::Coord;
use crate::point::Point;
use crate::tree::node::Node;
use crate::tree::node::NodeID;

pub use crate::tree::check::TreeError;
pub use crate::tree::check::Violation;
pub use crate::tree::direction::DIRECTION_COUNT;
pub use crate::tree::direction::Direction;
pub use crate::tree::walk::LocationVisitor;
pub use crate::tree::walk::NodeRef;
pub use crate::tree::walk::Walk;

mod check;
mod direction;
mod node;
mod walk;

/// A quadrant tree whose depth-first walk traces a continuous, self-avoiding path around a
/// center point.
///
/// Every node sits diagonally off its parent. The first ring is `radius / 2` away from the center
/// and each following ring halves that offset, so the whole tree stays within `radius` of the
/// center on both axes.
///
/// The tree is built, pruned and frozen by [`SpaceFillingTree::new`]. Afterwards it can only be
/// walked.
#[derive(Debug, Clone)]
pub struct SpaceFillingTree {
    /// The index of the root of the tree in `nodes`
    root: NodeID,

    /// Axis-Aligned Bounding Box of every node position
    bbox: Aabb,

    nodes: Vec<Node>,
}

impl SpaceFillingTree {
    /// Build the tree around `center`, subdividing `depth` times below the first ring.
    ///
    /// Any `center` is accepted. Positions that would fall outside the [`Coord`] range are
    /// clamped to its edge.
    ///
    /// A `depth` of `0` yields the root and its four first-ring children only.
    pub fn new(center: Point, radius: Coord, depth: u32) -> Self {
        let mut tree = Self::grow(center, radius, depth);
        let grown = tree.nodes.len();

        let pruned = tree.prune();
        tree.compact();
        tree.bbox = Aabb::from_points(tree.nodes.iter().map(|node| &node.position));

        debug!(
            ?center,
            radius,
            depth,
            grown,
            pruned,
            nodes = tree.nodes.len(),
            "Built space filling tree"
        );

        debug_assert_eq!(tree.check(), Ok(()));

        tree
    }

    /// Build the full tree without pruning it.
    fn grow(center: Point, radius: Coord, depth: u32) -> Self {
        // the rings add up to radius because 1/2 + 1/4 + 1/8 + ... = 1
        let first_offset = radius / 2;

        // the root counts as one subdivision level of its own, so the first ring is created with
        // `depth` left and the deepest ring with `0`
        let root = Node::new(None, depth.saturating_add(1), center, None);

        let mut tree = SpaceFillingTree {
            root: 0,
            bbox: Aabb::new(),
            nodes: vec![root],
        };

        for dir in Direction::ALL {
            tree.add_child(tree.root, dir, first_offset);
        }

        tree
    }

    /// Insert a node `offset` away from `id` in the quadrant `dir`, then subdivide it.
    ///
    /// A node heading straight back to where `id` came from is spliced in between `id` and its
    /// parent instead, so that the path through that junction stays continuous.
    fn add_child(&mut self, id: NodeID, dir: Direction, offset: Coord) {
        let current = &self.nodes[id];
        let position = current.position + Point::in_dir(dir, offset);
        let depth_remaining = current.depth_remaining.saturating_sub(1);
        let (parent, incoming) = (current.parent, current.incoming);
        let existing = current.children[dir];
        let new_id: NodeID = self.nodes.len();

        match (parent, incoming) {
            (Some(parent), Some(incoming)) if dir == incoming.opposite() => {
                // make
                //   parent --> new --> current
                // rather than
                //   parent -----------> current
                //            new <-----'
                trace!(?position, %incoming, "Splicing node above {:?}", self.nodes[id].position);

                let mut node = Node::new(Some(parent), depth_remaining, position, Some(incoming));
                node.children[incoming] = Some(id);
                self.nodes.push(node);

                self.nodes[parent].children[incoming] = Some(new_id);
                self.nodes[id].parent = Some(new_id);
            }
            _ => {
                let mut node = Node::new(Some(id), depth_remaining, position, Some(dir));

                // make
                //   current --> new --> existing
                // rather than
                //   current ----------> existing
                if let Some(existing) = existing {
                    node.children[dir] = Some(existing);
                    self.nodes[existing].parent = Some(new_id);
                }

                self.nodes.push(node);
                self.nodes[id].children[dir] = Some(new_id);
            }
        }

        if depth_remaining == 0 {
            return;
        }

        for child_dir in Direction::ALL {
            self.add_child(new_id, child_dir, offset / 2);
        }
    }

    /// Skip over nodes that only pass the path straight through, returning how many were
    /// discarded.
    ///
    /// A child with a front child but no child to its left or right is replaced by that front
    /// child. Discarded nodes stay in the arena, unreachable, until [`Self::compact`].
    fn prune(&mut self) -> usize {
        let mut discarded = 0;
        let mut pending = vec![self.root];

        while let Some(id) = pending.pop() {
            for dir in Direction::ALL {
                let Some(child) = self.nodes[id].children[dir] else {
                    continue;
                };

                let grandchildren = self.nodes[child].children;
                let front = grandchildren[dir];
                let left = grandchildren[dir.prev()];
                let right = grandchildren[dir.next()];

                let next = match front {
                    Some(front) if left.is_none() && right.is_none() => {
                        trace!(position = ?self.nodes[child].position, "Pruning pass-through node");

                        let skipped = &mut self.nodes[child];
                        skipped.children[dir] = None;
                        skipped.parent = None;

                        self.nodes[front].parent = Some(id);
                        self.nodes[id].children[dir] = Some(front);
                        discarded += 1;

                        front
                    }
                    _ => child,
                };

                pending.push(next);
            }
        }

        discarded
    }

    /// Drop every node that is no longer reachable from the root, renumbering the rest in
    /// pre-order.
    fn compact(&mut self) {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id].children.iter().map(|(_, child)| child).rev());
        }

        let mut remap: Vec<Option<NodeID>> = vec![None; self.nodes.len()];
        for (new, &old) in order.iter().enumerate() {
            remap[old] = Some(new);
        }

        let nodes = order
            .iter()
            .map(|&old| {
                let mut node = self.nodes[old].clone();
                node.parent = node.parent.and_then(|parent| remap[parent]);

                for dir in Direction::ALL {
                    node.children[dir] = node.children[dir].and_then(|child| remap[child]);
                }

                node
            })
            .collect();

        self.nodes = nodes;
        self.root = 0;
    }

    /// Number of nodes in the tree, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Bounding box of every node position.
    pub fn bbox(&self) -> &Aabb {
        &self.bbox
    }

    /// Read-only view of the root, for renderers and diagnostics.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, self.root)
    }

    /// Every node, in no particular order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(|id| NodeRef::new(self, id))
    }

    /// Replay the path, handing every position to `visitor` in order.
    ///
    /// The root is visited first. Each child's sub-walk is followed by a visit back to its parent,
    /// so a tree with `n` nodes yields `2 * (n - 1) + 1` visits.
    pub fn walk<V: LocationVisitor + ?Sized>(&self, visitor: &mut V) {
        for position in self.points() {
            visitor.visit(position);
        }
    }

    /// The same sequence as [`Self::walk`], as a lazy iterator.
    pub fn points(&self) -> Walk<'_> {
        Walk::new(self)
    }
}
