use std::fmt::Debug;
use std::ops::Index;
use std::ops::IndexMut;

use crate::point::Point;
use crate::tree::direction::DIRECTION_COUNT;
use crate::tree::direction::Direction;

/// Index of a node in the tree's arena.
pub type NodeID = usize;

/// One optional child per quadrant.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Children([Option<NodeID>; DIRECTION_COUNT]);

impl Children {
    pub fn empty() -> Self {
        Children([None; DIRECTION_COUNT])
    }

    /// Present children, in compass order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Direction, NodeID)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self[dir].map(|id| (dir, id)))
    }

    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Index<Direction> for Children {
    type Output = Option<NodeID>;

    fn index(&self, index: Direction) -> &Self::Output {
        &self.0[index.index()]
    }
}

impl IndexMut<Direction> for Children {
    fn index_mut(&mut self, index: Direction) -> &mut Self::Output {
        &mut self.0[index.index()]
    }
}

impl Debug for Children {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let g = |i: Option<NodeID>| -> isize { i.map_or(-1, |i| i as isize) };

        write!(
            f,
            "[LU: {}, RU: {}, RD: {}, LD: {}]",
            g(self.0[0]),
            g(self.0[1]),
            g(self.0[2]),
            g(self.0[3])
        )
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    /// `None` only for the root, and for nodes discarded by pruning.
    pub parent: Option<NodeID>,

    /// Subdivision budget left when this node was created. Nodes with `0` are never subdivided.
    pub depth_remaining: u32,

    pub position: Point,

    /// The slot of the parent this node sits in. `None` for the root.
    pub incoming: Option<Direction>,

    pub children: Children,
}

impl Node {
    pub fn new(
        parent: Option<NodeID>,
        depth_remaining: u32,
        position: Point,
        incoming: Option<Direction>,
    ) -> Self {
        Node {
            parent,
            depth_remaining,
            position,
            incoming,
            children: Children::empty(),
        }
    }

    /// See [`Direction::walk_start`].
    pub fn walk_start(&self) -> Direction {
        Direction::walk_start(self.incoming)
    }
}
