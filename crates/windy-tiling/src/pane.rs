use serde::{Deserialize, Serialize};
use windy_common::{ContentType, NodeId, Rect};

/// Never allocated; marks placeholders and panes made after id exhaustion.
pub(crate) const UNASSIGNED_ID: NodeId = NodeId(0);

/// A leaf of the layout: one content area.
///
/// `floating_bounds` is `Some` exactly while the pane sits in the floating
/// list; the manager keeps `is_floating` in step with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pane {
    pub id: NodeId,
    pub title: String,
    pub content_type: ContentType,
    pub is_floating: bool,
    pub is_hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_bounds: Option<Rect>,
}

impl Pane {
    pub fn new(id: NodeId, title: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            id,
            title: title.into(),
            content_type,
            is_floating: false,
            is_hidden: false,
            floating_bounds: None,
        }
    }

    /// Switch content type and take that type's display title.
    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
        self.title = content_type.default_title().to_string();
    }

    pub(crate) fn float_at(&mut self, bounds: Rect) {
        self.is_floating = true;
        self.floating_bounds = Some(bounds);
    }

    pub(crate) fn dock(&mut self) {
        self.is_floating = false;
        self.floating_bounds = None;
    }

    /// Stand-in used while a tree slot is being rebuilt. Never observable.
    pub(crate) fn placeholder() -> Self {
        Self::new(UNASSIGNED_ID, String::new(), ContentType::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pane_is_tiled_and_visible() {
        let pane = Pane::new(NodeId(7), "Help", ContentType::Help);
        assert_eq!(pane.id, NodeId(7));
        assert_eq!(pane.title, "Help");
        assert!(!pane.is_floating);
        assert!(!pane.is_hidden);
        assert!(pane.floating_bounds.is_none());
    }

    #[test]
    fn set_content_type_updates_title() {
        let mut pane = Pane::new(NodeId(1), "Main View", ContentType::Empty);
        pane.set_content_type(ContentType::UvGraph);
        assert_eq!(pane.content_type, ContentType::UvGraph);
        assert_eq!(pane.title, "UV Editor");
    }

    #[test]
    fn float_and_dock_keep_flag_and_bounds_together() {
        let mut pane = Pane::new(NodeId(1), "Demo", ContentType::Demo);
        pane.float_at(Rect::new(10.0, 20.0, 400.0, 300.0));
        assert!(pane.is_floating);
        assert_eq!(pane.floating_bounds, Some(Rect::new(10.0, 20.0, 400.0, 300.0)));

        pane.dock();
        assert!(!pane.is_floating);
        assert!(pane.floating_bounds.is_none());
    }

    #[test]
    fn tiled_pane_omits_bounds_in_json() {
        let pane = Pane::new(NodeId(3), "Empty", ContentType::Empty);
        let json = serde_json::to_string(&pane).unwrap();
        assert!(!json.contains("floating_bounds"));
        assert!(json.contains("\"content_type\":\"empty\""));
    }
}
