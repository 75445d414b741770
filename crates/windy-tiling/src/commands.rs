use serde::{Deserialize, Serialize};
use windy_common::{ContentType, NodeId, Rect};

use crate::tree::Direction;

/// Every layout mutation as plain data, for hosts that route UI actions
/// through a queue or a message channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum LayoutCommand {
    Create {
        title: String,
        direction: Direction,
        ratio: f64,
        #[serde(default)]
        parent: Option<NodeId>,
        #[serde(default)]
        content_type: ContentType,
    },
    /// Split `target` with a fresh pane at the configured default ratio.
    Split {
        target: NodeId,
        title: String,
        direction: Direction,
        #[serde(default)]
        content_type: ContentType,
    },
    Close {
        target: NodeId,
    },
    Float {
        target: NodeId,
    },
    Snap {
        target: NodeId,
        parent: NodeId,
        direction: Direction,
    },
    Hide {
        target: NodeId,
    },
    Show {
        target: NodeId,
    },
    SetRatio {
        split: NodeId,
        ratio: f64,
    },
    Resize {
        split: NodeId,
        ratio: f64,
    },
    SetContentType {
        target: NodeId,
        content_type: ContentType,
    },
    SetFloatingBounds {
        target: NodeId,
        bounds: Rect,
    },
    Maximize {
        target: NodeId,
    },
    Restore,
    Clear,
}
