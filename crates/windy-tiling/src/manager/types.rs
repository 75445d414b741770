//! Core types, constructors, queries and change notification for LayoutManager.

use serde::Serialize;
use tracing::trace;
use windy_common::{ContentType, EventBus, NodeId, Rect};
use windy_config::WindyConfig;

use crate::layout::LayoutEngine;
use crate::pane::Pane;
use crate::tree::{LayoutNode, NodeMatch};

/// Callback run after every applied mutation, with the post-mutation state.
pub type Subscriber = Box<dyn FnMut(&LayoutManager)>;

/// Handle returned by [`LayoutManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the whole workspace layout: the tiled tree, the floating list and
/// the maximized pane. All changes go through its commands; each applied
/// command bumps `version` and notifies subscribers in subscription order.
pub struct LayoutManager {
    /// The root of the tiled tree. `None` only before the first pane or after `clear`.
    pub(super) root: Option<LayoutNode>,
    /// Floating panes in z-order; the last one is topmost.
    pub(super) floating: Vec<Pane>,
    /// Pane currently shown full-extent, tiled or floating.
    pub(super) maximized: Option<NodeId>,
    pub(super) version: u64,
    pub(super) subscribers: Vec<(SubscriptionId, Subscriber)>,
    pub(super) next_subscription: u64,
    /// Auto-incrementing counter shared by panes and splits.
    pub(super) next_id: u32,
    pub(super) config: WindyConfig,
    /// Area floated panes are centered in.
    pub(super) viewport: Rect,
    pub(super) layout_engine: LayoutEngine,
    /// Side channel for `trigger`.
    pub(super) events: EventBus,
}

/// Detached copy of the observable state at one version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub root: Option<LayoutNode>,
    pub floating: Vec<Pane>,
    pub maximized: Option<NodeId>,
    pub version: u64,
}

impl LayoutManager {
    /// Create a manager with a single empty "Main View" pane.
    pub fn new() -> Self {
        Self::with_config(WindyConfig::default())
    }

    pub fn with_config(config: WindyConfig) -> Self {
        let mut mgr = Self {
            root: None,
            floating: Vec::new(),
            maximized: None,
            version: 0,
            subscribers: Vec::new(),
            next_subscription: 1,
            next_id: 1,
            viewport: config.viewport.as_rect(),
            layout_engine: LayoutEngine {
                gap: config.tiling.gap,
            },
            events: EventBus::new(config.event_capacity()),
            config,
        };
        let main = mgr.create_pane("Main View", ContentType::Empty);
        mgr.root = Some(LayoutNode::Pane(main));
        mgr
    }

    /// Next free id, or `None` once the id space is used up.
    pub(super) fn allocate_id(&mut self) -> Option<NodeId> {
        let next = self.next_id.checked_add(1)?;
        let id = NodeId(self.next_id);
        self.next_id = next;
        Some(id)
    }

    // -- Subscriptions --

    pub fn subscribe(&mut self, callback: impl FnMut(&LayoutManager) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Bump the version, then run every subscriber against the new state.
    pub(super) fn notify(&mut self) {
        self.version += 1;
        trace!(version = self.version, "layout changed");
        let mut subscribers = std::mem::take(&mut self.subscribers);
        for (_, callback) in subscribers.iter_mut() {
            callback(&*self);
        }
        self.subscribers = subscribers;
    }

    // -- Accessors --

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn root(&self) -> Option<&LayoutNode> {
        self.root.as_ref()
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root.as_ref().map(LayoutNode::id)
    }

    pub fn floating(&self) -> &[Pane] {
        &self.floating
    }

    pub fn maximized_id(&self) -> Option<NodeId> {
        self.maximized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized.is_some()
    }

    pub fn config(&self) -> &WindyConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Update the area floated panes are centered in. Not a layout change.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn gap(&self) -> u32 {
        self.layout_engine.gap
    }

    /// Depth-first search of the tiled tree only.
    pub fn find_node_and_parent(&self, id: NodeId) -> Option<NodeMatch<'_>> {
        self.root.as_ref()?.find_node_and_parent(id)
    }

    /// Look up a pane, tiled first, then floating.
    pub fn pane(&self, id: NodeId) -> Option<&Pane> {
        self.root
            .as_ref()
            .and_then(|root| root.find_pane(id))
            .or_else(|| self.floating.iter().find(|p| p.id == id))
    }

    /// Whether `id` names any node in the tiled tree or the floating list.
    pub fn contains(&self, id: NodeId) -> bool {
        self.root.as_ref().is_some_and(|root| root.contains(id))
            || self.floating.iter().any(|p| p.id == id)
    }

    /// Tiled plus floating panes.
    pub fn pane_count(&self) -> usize {
        self.root.as_ref().map_or(0, LayoutNode::pane_count) + self.floating.len()
    }

    /// Tiled pane IDs in depth-first left-to-right order (matches visual layout).
    pub fn ordered_pane_ids(&self) -> Vec<NodeId> {
        self.root
            .as_ref()
            .map(LayoutNode::collect_pane_ids)
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            root: self.root.clone(),
            floating: self.floating.clone(),
            maximized: self.maximized,
            version: self.version,
        }
    }

    pub(super) fn floating_index(&self, id: NodeId) -> Option<usize> {
        self.floating.iter().position(|p| p.id == id)
    }

    pub(super) fn tiled_pane_mut(&mut self, id: NodeId) -> Option<&mut Pane> {
        self.root.as_mut()?.find_pane_mut(id)
    }

    pub(super) fn floating_pane_mut(&mut self, id: NodeId) -> Option<&mut Pane> {
        self.floating.iter_mut().find(|p| p.id == id)
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LayoutManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutManager")
            .field("root", &self.root)
            .field("floating", &self.floating)
            .field("maximized", &self.maximized)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
