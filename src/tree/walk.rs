use core::fmt::Debug;
use std::iter::FusedIterator;

use crate::point::Point;
use crate::tree::SpaceFillingTree;
use crate::tree::direction::DIRECTION_COUNT;
use crate::tree::direction::Direction;
use crate::tree::node::Node;
use crate::tree::node::NodeID;

/// Receives the walk of a [`SpaceFillingTree`], one position at a time.
///
/// Any `FnMut(Point)` closure is a visitor.
pub trait LocationVisitor {
    fn visit(&mut self, position: Point);
}

impl<F> LocationVisitor for F
where
    F: FnMut(Point),
{
    fn visit(&mut self, position: Point) {
        self(position)
    }
}

struct Frame {
    id: NodeID,

    /// How many of the node's slots, counted from its walk start, have been looked at.
    tried: usize,
}

/// Lazy depth-first walk over a [`SpaceFillingTree`]. See [`SpaceFillingTree::walk`].
///
/// Every node is entered on its own position and, after each child's sub-walk, the walk comes
/// back to that position again. Children are taken in clockwise order starting with the slot
/// straight ahead of the direction the node was entered from, which keeps the path from
/// crossing itself.
pub struct Walk<'a> {
    tree: &'a SpaceFillingTree,
    stack: Vec<Frame>,
    started: bool,
    remaining: usize,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(tree: &'a SpaceFillingTree) -> Self {
        Walk {
            tree,
            stack: Vec::new(),
            started: false,
            // one visit on the way in, plus one per edge on the way back out
            remaining: 2 * tree.nodes.len() - 1,
        }
    }

    fn step(&mut self) -> Option<Point> {
        let tree = self.tree;
        let nodes = &tree.nodes;

        if !self.started {
            self.started = true;
            self.stack.push(Frame {
                id: tree.root,
                tried: 0,
            });

            return Some(nodes[tree.root].position);
        }

        let frame = self.stack.last_mut()?;
        let node = &nodes[frame.id];
        let start = node.walk_start();

        while frame.tried < DIRECTION_COUNT {
            let dir = start.rotate(frame.tried);
            frame.tried += 1;

            if let Some(child) = node.children[dir] {
                self.stack.push(Frame { id: child, tried: 0 });

                return Some(nodes[child].position);
            }
        }

        // done with this node, head back to the middle of its parent
        self.stack.pop();
        self.stack.last().map(|frame| nodes[frame.id].position)
    }
}

impl Iterator for Walk<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.step()?;
        self.remaining -= 1;

        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Walk<'_> {}
impl FusedIterator for Walk<'_> {}

impl Debug for Walk<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walk")
            .field("depth", &self.stack.len())
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Read-only view of one node of a [`SpaceFillingTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a SpaceFillingTree,
    id: NodeID,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a SpaceFillingTree, id: NodeID) -> Self {
        NodeRef { tree, id }
    }

    fn node(self) -> &'a Node {
        &self.tree.nodes[self.id]
    }

    /// Index of the node, unique within its tree.
    pub fn id(self) -> NodeID {
        self.id
    }

    pub fn position(self) -> Point {
        self.node().position
    }

    pub fn depth_remaining(self) -> u32 {
        self.node().depth_remaining
    }

    /// The parent slot this node occupies. `None` for the root.
    pub fn incoming(self) -> Option<Direction> {
        self.node().incoming
    }

    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn child(self, dir: Direction) -> Option<NodeRef<'a>> {
        self.node().children[dir].map(|id| NodeRef::new(self.tree, id))
    }

    pub fn is_leaf(self) -> bool {
        self.node().children.is_empty()
    }

    /// Present children, in compass order.
    pub fn children(self) -> impl DoubleEndedIterator<Item = (Direction, NodeRef<'a>)> {
        let tree = self.tree;

        self.node()
            .children
            .iter()
            .map(move |(dir, id)| (dir, NodeRef::new(tree, id)))
    }

    /// Present children, in the order the walk visits them.
    pub fn walk_children(self) -> impl Iterator<Item = (Direction, NodeRef<'a>)> {
        let start = self.node().walk_start();

        (0..DIRECTION_COUNT).filter_map(move |k| {
            let dir = start.rotate(k);
            self.child(dir).map(|child| (dir, child))
        })
    }
}

impl Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.node();

        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("position", &node.position)
            .field("incoming", &node.incoming)
            .field("depth_remaining", &node.depth_remaining)
            .field("children", &node.children)
            .finish()
    }
}
