//! Layout engine configuration.

/// Turns the tiled tree into pane rectangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between the two children of every split.
    pub gap: u32,
}
