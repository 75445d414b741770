//! Structural edits on the layout tree: wrap a node into a split, and
//! collapse a split when one of its children is removed.

use windy_common::NodeId;

use super::{Direction, LayoutNode, Side, Split};
use crate::pane::Pane;

impl LayoutNode {
    /// Replace the node at `path` with a new split holding the old node in
    /// `first` and `new_node` in `second`. Returns `false` if `path` does
    /// not resolve.
    pub fn wrap_at(
        &mut self,
        path: &[Side],
        new_node: LayoutNode,
        split_id: NodeId,
        direction: Direction,
        ratio: f64,
    ) -> bool {
        let Some(slot) = self.node_at_mut(path) else {
            return false;
        };
        let existing = std::mem::replace(slot, LayoutNode::Pane(Pane::placeholder()));
        *slot = LayoutNode::split(split_id, direction, ratio, existing, new_node);
        true
    }

    /// Remove the node at `path` and let its sibling take the parent split's
    /// slot. Returns the removed subtree. The root (empty path) cannot be
    /// removed this way; the caller decides what replaces it.
    pub fn collapse_at(&mut self, path: &[Side]) -> Option<LayoutNode> {
        let (side, parent_path) = path.split_last()?;
        let parent_slot = self.node_at_mut(parent_path)?;
        if !matches!(parent_slot, LayoutNode::Split(_)) {
            return None;
        }

        match std::mem::replace(parent_slot, LayoutNode::Pane(Pane::placeholder())) {
            LayoutNode::Split(Split { first, second, .. }) => {
                let (removed, sibling) = match side {
                    Side::First => (first, second),
                    Side::Second => (second, first),
                };
                *parent_slot = *sibling;
                Some(*removed)
            }
            pane => {
                *parent_slot = pane;
                None
            }
        }
    }
}
