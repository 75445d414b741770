//! Create, split, close, float, snap and clear on the LayoutManager.

use tracing::{debug, trace, warn};
use windy_common::{ContentType, NodeId};

use crate::pane::{Pane, UNASSIGNED_ID};
use crate::tree::{Direction, LayoutNode};

use super::LayoutManager;

impl LayoutManager {
    /// Allocate a pane with a fresh id. Does not touch the layout.
    /// Once ids run out the pane carries an id no command accepts.
    pub fn create_pane(&mut self, title: impl Into<String>, content_type: ContentType) -> Pane {
        let id = self.allocate_id().unwrap_or_else(|| {
            warn!("node id space exhausted");
            UNASSIGNED_ID
        });
        Pane::new(id, title, content_type)
    }

    /// Create a pane and place it: beside `parent` when given, else beside
    /// the root, else as the root. Returns the new pane's id either way.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        direction: Direction,
        ratio: f64,
        parent: Option<NodeId>,
        content_type: ContentType,
    ) -> NodeId {
        let pane = self.create_pane(title, content_type);
        let id = pane.id;
        match parent.or_else(|| self.root_id()) {
            Some(target) => {
                self.split(target, pane, direction, ratio);
            }
            None if id == UNASSIGNED_ID => {
                trace!("create: no id left for a root pane");
            }
            None => {
                debug!(pane = %id, "installed first pane as root");
                self.root = Some(LayoutNode::Pane(pane));
                self.notify();
            }
        }
        id
    }

    /// Wrap `target` and `new_pane` into a new split, `target` first.
    pub fn split(
        &mut self,
        target: NodeId,
        mut new_pane: Pane,
        direction: Direction,
        ratio: f64,
    ) -> bool {
        let Some(path) = self.root.as_ref().and_then(|root| root.locate(target)) else {
            trace!(%target, "split: target not in tiled tree");
            return false;
        };
        if new_pane.id == UNASSIGNED_ID || self.contains(new_pane.id) {
            trace!(pane = %new_pane.id, "split: pane id unassigned or already in use");
            return false;
        }

        let new_id = new_pane.id;
        // Panes built outside `create_pane` must not collide with later ids.
        let Some(reserved) = new_id.0.checked_add(1) else {
            trace!(pane = %new_id, "split: no id left for the split");
            return false;
        };
        let saved_next = self.next_id;
        self.next_id = self.next_id.max(reserved);
        let Some(split_id) = self.allocate_id() else {
            self.next_id = saved_next;
            trace!(pane = %new_id, "split: no id left for the split");
            return false;
        };
        new_pane.dock();
        let Some(root) = self.root.as_mut() else {
            return false;
        };
        if !root.wrap_at(&path, LayoutNode::Pane(new_pane), split_id, direction, ratio) {
            return false;
        }

        debug!(%target, pane = %new_id, split = %split_id, ?direction, ratio, "split");
        self.notify();
        true
    }

    /// Remove a floating pane, or a tiled node together with its subtree.
    /// Closing the root leaves a fresh empty pane in its place.
    pub fn close(&mut self, target: NodeId) -> bool {
        let mut changed = false;
        if self.maximized == Some(target) {
            self.maximized = None;
            changed = true;
        }

        if let Some(idx) = self.floating_index(target) {
            self.floating.remove(idx);
            debug!(%target, "closed floating pane");
            self.notify();
            return true;
        }

        if self.detach_tiled(target).is_some() {
            self.clear_stale_maximized();
            debug!(%target, "closed tiled node");
            self.notify();
            return true;
        }

        if changed {
            self.notify();
        } else {
            trace!(%target, "close: target not found");
        }
        changed
    }

    /// Move a tiled pane out of the tree and into the floating list,
    /// centered in the viewport at the configured default size.
    pub fn float(&mut self, target: NodeId) -> bool {
        let is_tiled_pane = self
            .find_node_and_parent(target)
            .is_some_and(|found| found.node.is_pane());
        if !is_tiled_pane {
            trace!(%target, "float: not a tiled pane");
            return false;
        }

        if self.maximized == Some(target) {
            self.maximized = None;
        }
        let Some(LayoutNode::Pane(mut pane)) = self.detach_tiled(target) else {
            return false;
        };
        self.notify();

        let size = &self.config.floating;
        let bounds = self.viewport.centered(size.width, size.height);
        pane.float_at(bounds);
        self.floating.push(pane);
        debug!(%target, x = bounds.x, y = bounds.y, "floated pane");
        self.notify();
        true
    }

    /// Put a floating pane back into the tree beside `parent`, always at an
    /// even ratio. If `parent` is not a tiled node the pane stays floating.
    pub fn snap(&mut self, target: NodeId, parent: NodeId, direction: Direction) -> bool {
        let Some(idx) = self.floating_index(target) else {
            trace!(%target, "snap: not a floating pane");
            return false;
        };
        if !self.root.as_ref().is_some_and(|root| root.contains(parent)) {
            trace!(%target, %parent, "snap: parent not in tiled tree");
            return false;
        }
        if self.next_id.checked_add(1).is_none() {
            trace!(%target, "snap: no id left for the split");
            return false;
        }

        let mut pane = self.floating.remove(idx);
        pane.dock();
        self.split(parent, pane, direction, 0.5)
    }

    /// Drop every pane: no root, no floating panes, nothing maximized.
    pub fn clear(&mut self) {
        self.root = None;
        self.floating.clear();
        self.maximized = None;
        debug!("cleared layout");
        self.notify();
    }

    /// Take `target` out of the tiled tree, collapsing its parent split.
    /// When `target` is the root a fresh empty pane replaces it.
    fn detach_tiled(&mut self, target: NodeId) -> Option<LayoutNode> {
        let path = self.root.as_ref()?.locate(target)?;
        if path.is_empty() {
            let fresh = self.create_pane(ContentType::Empty.default_title(), ContentType::Empty);
            return self.root.replace(LayoutNode::Pane(fresh));
        }
        self.root.as_mut()?.collapse_at(&path)
    }

    fn clear_stale_maximized(&mut self) {
        if let Some(id) = self.maximized {
            if !self.contains(id) {
                debug!(pane = %id, "maximized pane was closed");
                self.maximized = None;
            }
        }
    }
}
