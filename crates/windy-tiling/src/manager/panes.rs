//! Per-node property changes: visibility, ratio, content type, geometry,
//! maximize/restore, and the trigger side channel.

use tracing::{debug, info, trace};
use windy_common::{ContentType, NodeId, PaneEvent, Rect};

use super::LayoutManager;

impl LayoutManager {
    pub fn hide(&mut self, target: NodeId) -> bool {
        self.set_hidden(target, true)
    }

    pub fn show(&mut self, target: NodeId) -> bool {
        self.set_hidden(target, false)
    }

    fn set_hidden(&mut self, target: NodeId, hidden: bool) -> bool {
        let Some(pane) = self.tiled_pane_mut(target) else {
            trace!(%target, hidden, "set_hidden: not a tiled pane");
            return false;
        };
        pane.is_hidden = hidden;
        debug!(%target, hidden, "pane visibility changed");
        self.notify();
        true
    }

    /// Set a split's ratio as given. Callers clamp; see [`Self::resize`].
    pub fn set_ratio(&mut self, split: NodeId, ratio: f64) -> bool {
        let Some(node) = self.root.as_mut().and_then(|root| root.find_split_mut(split)) else {
            trace!(%split, "set_ratio: not a split");
            return false;
        };
        node.ratio = ratio;
        debug!(%split, ratio, "split ratio set");
        self.notify();
        true
    }

    /// Interactive resize: clamp into the configured band, then set.
    pub fn resize(&mut self, split: NodeId, ratio: f64) -> bool {
        let clamped = self.config.tiling.clamp_ratio(ratio);
        self.set_ratio(split, clamped)
    }

    /// Change what a pane hosts; its title follows the content type.
    pub fn set_content_type(&mut self, target: NodeId, content_type: ContentType) -> bool {
        let updated = match self.tiled_pane_mut(target) {
            Some(pane) => {
                pane.set_content_type(content_type);
                true
            }
            None => false,
        };
        let updated = updated
            || match self.floating_pane_mut(target) {
                Some(pane) => {
                    pane.set_content_type(content_type);
                    true
                }
                None => false,
            };

        if !updated {
            trace!(%target, "set_content_type: pane not found");
            return false;
        }
        debug!(%target, %content_type, "content type changed");
        self.notify();
        true
    }

    /// Store geometry reported by the host for a floating pane.
    pub fn set_floating_bounds(&mut self, target: NodeId, bounds: Rect) -> bool {
        let Some(pane) = self.floating_pane_mut(target) else {
            trace!(%target, "set_floating_bounds: not a floating pane");
            return false;
        };
        pane.floating_bounds = Some(bounds);
        self.notify();
        true
    }

    /// Show one pane, tiled or floating, over the whole workspace.
    pub fn maximize(&mut self, target: NodeId) -> bool {
        if self.pane(target).is_none() {
            trace!(%target, "maximize: pane not found");
            return false;
        }
        self.maximized = Some(target);
        debug!(%target, "maximized");
        self.notify();
        true
    }

    pub fn restore(&mut self) -> bool {
        self.maximized = None;
        debug!("restored");
        self.notify();
        true
    }

    /// Publish a pane-local action to whoever listens on [`Self::events`].
    /// Never changes the layout or the version. Returns the receiver count.
    pub fn trigger(&self, event: impl Into<String>, payload: serde_json::Value) -> usize {
        let event = PaneEvent::new(event, payload);
        info!(event = %event.name, payload = %event.payload, "pane event");
        self.events.publish(event)
    }
}
