//! Lookup over the layout tree.
//!
//! `locate` is the only search: a depth-first walk, first child before
//! second, that records the route to the first node carrying the id.
//! Everything else resolves that route with `node_at`/`node_at_mut`.

use windy_common::NodeId;

use super::{LayoutNode, NodePath, Side, Split};
use crate::pane::Pane;

/// A located node together with its immediate parent split.
#[derive(Debug, Clone, Copy)]
pub struct NodeMatch<'a> {
    pub node: &'a LayoutNode,
    /// `None` when `node` is the root.
    pub parent: Option<&'a Split>,
}

impl LayoutNode {
    pub fn locate(&self, id: NodeId) -> Option<NodePath> {
        let mut path = NodePath::new();
        if self.locate_into(id, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn locate_into(&self, id: NodeId, path: &mut NodePath) -> bool {
        if self.id() == id {
            return true;
        }
        if let LayoutNode::Split(split) = self {
            for side in [Side::First, Side::Second] {
                path.push(side);
                if split.child(side).locate_into(id, path) {
                    return true;
                }
                path.pop();
            }
        }
        false
    }

    pub fn node_at(&self, path: &[Side]) -> Option<&LayoutNode> {
        path.iter().try_fold(self, |node, side| match node {
            LayoutNode::Split(split) => Some(split.child(*side)),
            LayoutNode::Pane(_) => None,
        })
    }

    pub fn node_at_mut(&mut self, path: &[Side]) -> Option<&mut LayoutNode> {
        let mut node = self;
        for side in path {
            node = match node {
                LayoutNode::Split(split) => split.child_mut(*side),
                LayoutNode::Pane(_) => return None,
            };
        }
        Some(node)
    }

    pub fn find_node_and_parent(&self, id: NodeId) -> Option<NodeMatch<'_>> {
        let path = self.locate(id)?;
        let node = self.node_at(&path)?;
        let parent = match path.split_last() {
            Some((_, parent_path)) => self.node_at(parent_path).and_then(LayoutNode::as_split),
            None => None,
        };
        Some(NodeMatch { node, parent })
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.locate(id).is_some()
    }

    pub fn find_pane(&self, id: NodeId) -> Option<&Pane> {
        let path = self.locate(id)?;
        self.node_at(&path).and_then(LayoutNode::as_pane)
    }

    pub fn find_pane_mut(&mut self, id: NodeId) -> Option<&mut Pane> {
        let path = self.locate(id)?;
        self.node_at_mut(&path).and_then(LayoutNode::as_pane_mut)
    }

    pub fn find_split_mut(&mut self, id: NodeId) -> Option<&mut Split> {
        let path = self.locate(id)?;
        self.node_at_mut(&path).and_then(LayoutNode::as_split_mut)
    }
}
