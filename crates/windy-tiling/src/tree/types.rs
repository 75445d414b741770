//! Core types for the layout tree: Direction, Side, Split and LayoutNode.

use serde::{Deserialize, Serialize};
use windy_common::NodeId;

use crate::pane::Pane;

/// Split axis. `Horizontal` places the children side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Which child slot of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Route from the root to a node. Empty means the root itself.
pub type NodePath = Vec<Side>;

/// Internal node dividing its area between exactly two children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub id: NodeId,
    pub direction: Direction,
    /// Fraction of the area given to `first`.
    pub ratio: f64,
    pub first: Box<LayoutNode>,
    pub second: Box<LayoutNode>,
}

impl Split {
    pub fn child(&self, side: Side) -> &LayoutNode {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut LayoutNode {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    /// The slot holding the direct child `id`, if any.
    pub fn side_of(&self, id: NodeId) -> Option<Side> {
        if self.first.id() == id {
            Some(Side::First)
        } else if self.second.id() == id {
            Some(Side::Second)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutNode {
    Pane(Pane),
    Split(Split),
}

impl LayoutNode {
    pub fn split(
        id: NodeId,
        direction: Direction,
        ratio: f64,
        first: LayoutNode,
        second: LayoutNode,
    ) -> Self {
        LayoutNode::Split(Split {
            id,
            direction,
            ratio,
            first: Box::new(first),
            second: Box::new(second),
        })
    }

    pub fn id(&self) -> NodeId {
        match self {
            LayoutNode::Pane(pane) => pane.id,
            LayoutNode::Split(split) => split.id,
        }
    }

    pub fn is_pane(&self) -> bool {
        matches!(self, LayoutNode::Pane(_))
    }

    pub fn as_pane(&self) -> Option<&Pane> {
        match self {
            LayoutNode::Pane(pane) => Some(pane),
            LayoutNode::Split(_) => None,
        }
    }

    pub fn as_pane_mut(&mut self) -> Option<&mut Pane> {
        match self {
            LayoutNode::Pane(pane) => Some(pane),
            LayoutNode::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&Split> {
        match self {
            LayoutNode::Split(split) => Some(split),
            LayoutNode::Pane(_) => None,
        }
    }

    pub fn as_split_mut(&mut self) -> Option<&mut Split> {
        match self {
            LayoutNode::Split(split) => Some(split),
            LayoutNode::Pane(_) => None,
        }
    }

    pub fn pane_count(&self) -> usize {
        match self {
            LayoutNode::Pane(_) => 1,
            LayoutNode::Split(split) => split.first.pane_count() + split.second.pane_count(),
        }
    }

    /// Collect all pane IDs in left-to-right (depth-first) order.
    pub fn collect_pane_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.collect_ids_into(&mut ids, false);
        ids
    }

    /// Collect every node ID, splits included, in pre-order.
    pub fn collect_node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.collect_ids_into(&mut ids, true);
        ids
    }

    fn collect_ids_into(&self, out: &mut Vec<NodeId>, with_splits: bool) {
        match self {
            LayoutNode::Pane(pane) => out.push(pane.id),
            LayoutNode::Split(split) => {
                if with_splits {
                    out.push(split.id);
                }
                split.first.collect_ids_into(out, with_splits);
                split.second.collect_ids_into(out, with_splits);
            }
        }
    }
}
