use thiserror::Error;

use crate::point::Point;
use crate::tree::SpaceFillingTree;
use crate::tree::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// The child in this slot has a child of its own pointing straight back.
    #[error("child in {} has a child in {}", .0, .0.opposite())]
    BackwardChild(Direction),

    #[error("child in {slot} was reached via {incoming:?}")]
    MislabeledChild {
        slot: Direction,
        incoming: Option<Direction>,
    },

    #[error("child in {0} does not point back to its parent")]
    BrokenParentLink(Direction),

    #[error("root has a parent or an incoming direction")]
    MalformedRoot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Invariant violated at {at:?}: {violation}")]
    InvariantViolated { at: Point, violation: Violation },
}

impl SpaceFillingTree {
    /// Confirm the structural invariants hold for every reachable node.
    ///
    /// A node never holds a child in the direction opposite to the one it was reached by; a
    /// violation means the walk would double back on itself.
    pub fn check(&self) -> Result<(), TreeError> {
        let root = &self.nodes[self.root];
        if root.parent.is_some() || root.incoming.is_some() {
            return Err(TreeError::InvariantViolated {
                at: root.position,
                violation: Violation::MalformedRoot,
            });
        }

        let mut pending = vec![self.root];

        while let Some(id) = pending.pop() {
            let node = &self.nodes[id];

            for (slot, child_id) in node.children.iter() {
                let child = &self.nodes[child_id];
                let fail = |violation| TreeError::InvariantViolated {
                    at: node.position,
                    violation,
                };

                if child.incoming != Some(slot) {
                    return Err(fail(Violation::MislabeledChild {
                        slot,
                        incoming: child.incoming,
                    }));
                }

                if child.parent != Some(id) {
                    return Err(fail(Violation::BrokenParentLink(slot)));
                }

                if child.children[slot.opposite()].is_some() {
                    return Err(fail(Violation::BackwardChild(slot)));
                }

                pending.push(child_id);
            }
        }

        Ok(())
    }
}
