//! Layout calculation: recursive tree-to-rect computation.

use windy_common::{NodeId, Rect};

use super::LayoutEngine;
use crate::tree::{Direction, LayoutNode};

impl LayoutEngine {
    /// Rectangles for every tiled pane, depth-first. Hidden panes keep
    /// their share of the area and are reported like any other.
    pub fn compute(&self, root: &LayoutNode, bounds: Rect) -> Vec<(NodeId, Rect)> {
        let mut results = Vec::new();
        self.layout_node(root, bounds, &mut results);
        results
    }

    fn layout_node(&self, node: &LayoutNode, bounds: Rect, out: &mut Vec<(NodeId, Rect)>) {
        match node {
            LayoutNode::Pane(pane) => out.push((pane.id, bounds)),
            LayoutNode::Split(split) => {
                let (a, b) = split_rects(bounds, split.direction, split.ratio, self.gap as f64);
                self.layout_node(&split.first, a, out);
                self.layout_node(&split.second, b, out);
            }
        }
    }
}

/// Divide `bounds` between the two children of a split.
pub(crate) fn split_rects(bounds: Rect, direction: Direction, ratio: f64, gap: f64) -> (Rect, Rect) {
    match direction {
        Direction::Horizontal => {
            let available_width = (bounds.width - gap).max(0.0);
            let w1 = available_width * ratio;
            let w2 = (available_width - w1).max(0.0);
            (
                Rect::new(bounds.x, bounds.y, w1, bounds.height),
                Rect::new(bounds.x + w1 + gap, bounds.y, w2, bounds.height),
            )
        }
        Direction::Vertical => {
            let available_height = (bounds.height - gap).max(0.0);
            let h1 = available_height * ratio;
            let h2 = (available_height - h1).max(0.0);
            (
                Rect::new(bounds.x, bounds.y, bounds.width, h1),
                Rect::new(bounds.x, bounds.y + h1 + gap, bounds.width, h2),
            )
        }
    }
}
