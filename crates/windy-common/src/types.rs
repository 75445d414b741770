use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `width` x `height` rect whose center coincides with this rect's center.
    pub fn centered(&self, width: f64, height: f64) -> Rect {
        Rect {
            x: self.x + self.width / 2.0 - width / 2.0,
            y: self.y + self.height / 2.0 - height / 2.0,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Identity of a layout node. Panes and splits share one id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// What a pane hosts. The renderer decides how each kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Empty,
    Help,
    Demo,
    Viewport3d,
    UvGraph,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Empty,
        ContentType::Help,
        ContentType::Demo,
        ContentType::Viewport3d,
        ContentType::UvGraph,
    ];

    /// Display title a pane takes when switched to this content type.
    pub fn default_title(self) -> &'static str {
        match self {
            ContentType::Empty => "Empty",
            ContentType::Help => "Help",
            ContentType::Demo => "Demo",
            ContentType::Viewport3d => "3D Viewport",
            ContentType::UvGraph => "UV Editor",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Empty => "empty",
            ContentType::Help => "help",
            ContentType::Demo => "demo",
            ContentType::Viewport3d => "viewport3d",
            ContentType::UvGraph => "uvgraph",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
