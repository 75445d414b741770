//! Split border computation for drag-resize hit testing.
//!
//! Walks the layout tree and produces one `SplitBorder` per split node,
//! describing where the divider sits and which split owns it. The drag
//! collaborator uses these to find the border under the pointer and to turn
//! a pointer position into a ratio for `LayoutManager::resize`.

use windy_common::{NodeId, Rect};

use super::calculation::split_rects;
use crate::tree::{Direction, LayoutNode};

// =============================================================================
// TYPES
// =============================================================================

/// A split border between two tiling regions.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitBorder {
    /// The split this divider belongs to.
    pub split_id: NodeId,
    /// The direction of the split (Horizontal = vertical divider line).
    pub direction: Direction,
    /// Position of the divider in pixels (x for horizontal, y for vertical).
    pub position: f64,
    /// Start of the divider line (y for horizontal, x for vertical).
    pub start: f64,
    /// End of the divider line.
    pub end: f64,
    /// The bounding rect of the entire split region.
    pub bounds: Rect,
}

impl SplitBorder {
    /// Half-width of the hit zone on each side of the border.
    const HIT_HALF_WIDTH: f64 = 6.0;

    /// Test whether a point (x, y) is within the drag zone of this border.
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        match self.direction {
            Direction::Horizontal => {
                (x - self.position).abs() <= Self::HIT_HALF_WIDTH
                    && y >= self.start
                    && y <= self.end
            }
            Direction::Vertical => {
                (y - self.position).abs() <= Self::HIT_HALF_WIDTH
                    && x >= self.start
                    && x <= self.end
            }
        }
    }

    /// Convert a pixel delta to a ratio delta for this border.
    pub fn pixel_to_ratio(&self, pixel_delta: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        pixel_delta / span
    }

    /// Unclamped ratio that would put the divider under the pointer.
    pub fn ratio_at(&self, x: f64, y: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.5;
        }
        match self.direction {
            Direction::Horizontal => (x - self.bounds.x) / span,
            Direction::Vertical => (y - self.bounds.y) / span,
        }
    }

    fn span(&self) -> f64 {
        match self.direction {
            Direction::Horizontal => self.bounds.width,
            Direction::Vertical => self.bounds.height,
        }
    }
}

// =============================================================================
// COMPUTATION
// =============================================================================

/// Compute all split borders from the tree within the given viewport.
pub fn compute_borders(root: &LayoutNode, bounds: Rect, gap: f64) -> Vec<SplitBorder> {
    let mut borders = Vec::new();
    walk_borders(root, bounds, gap, &mut borders);
    borders
}

fn walk_borders(node: &LayoutNode, bounds: Rect, gap: f64, out: &mut Vec<SplitBorder>) {
    let LayoutNode::Split(split) = node else {
        return;
    };

    let (first_bounds, second_bounds) = split_rects(bounds, split.direction, split.ratio, gap);
    let (position, start, end) = match split.direction {
        Direction::Horizontal => (
            first_bounds.x + first_bounds.width + gap / 2.0,
            bounds.y,
            bounds.y + bounds.height,
        ),
        Direction::Vertical => (
            first_bounds.y + first_bounds.height + gap / 2.0,
            bounds.x,
            bounds.x + bounds.width,
        ),
    };

    out.push(SplitBorder {
        split_id: split.id,
        direction: split.direction,
        position,
        start,
        end,
        bounds,
    });

    walk_borders(&split.first, first_bounds, gap, out);
    walk_borders(&split.second, second_bounds, gap, out);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::Pane;
    use windy_common::ContentType;

    fn leaf(id: u32) -> LayoutNode {
        LayoutNode::Pane(Pane::new(NodeId(id), "Pane", ContentType::Empty))
    }

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn border(direction: Direction, position: f64, end: f64) -> SplitBorder {
        SplitBorder {
            split_id: NodeId(9),
            direction,
            position,
            start: 0.0,
            end,
            bounds: viewport(),
        }
    }

    #[test]
    fn single_pane_no_borders() {
        assert!(compute_borders(&leaf(1), viewport(), 2.0).is_empty());
    }

    #[test]
    fn horizontal_split_one_border() {
        let tree = LayoutNode::split(NodeId(3), Direction::Horizontal, 0.5, leaf(1), leaf(2));
        let borders = compute_borders(&tree, viewport(), 2.0);
        assert_eq!(borders.len(), 1);
        assert_eq!(borders[0].direction, Direction::Horizontal);
        assert_eq!(borders[0].split_id, NodeId(3));
        // At 50% of (800 - 2) = 399, border at 399 + 1 = 400
        assert!((borders[0].position - 400.0).abs() < 1.0);
    }

    #[test]
    fn vertical_split_one_border() {
        let tree = LayoutNode::split(NodeId(3), Direction::Vertical, 0.5, leaf(1), leaf(2));
        let borders = compute_borders(&tree, viewport(), 2.0);
        assert_eq!(borders.len(), 1);
        assert_eq!(borders[0].direction, Direction::Vertical);
        assert!((borders[0].position - 300.0).abs() < 1.0);
    }

    #[test]
    fn nested_split_two_borders() {
        // [1 | 2 / 3]
        let tree = LayoutNode::split(
            NodeId(10),
            Direction::Horizontal,
            0.5,
            leaf(1),
            LayoutNode::split(NodeId(11), Direction::Vertical, 0.5, leaf(2), leaf(3)),
        );
        let borders = compute_borders(&tree, viewport(), 0.0);
        assert_eq!(borders.len(), 2);
        assert_eq!(borders[0].split_id, NodeId(10));
        assert_eq!(borders[1].split_id, NodeId(11));
        // The inner divider spans only the right half.
        assert!((borders[1].start - 400.0).abs() < 0.01);
        assert!((borders[1].end - 800.0).abs() < 0.01);
    }

    #[test]
    fn hit_test_horizontal_border() {
        let border = border(Direction::Horizontal, 400.0, 600.0);
        assert!(border.hit_test(400.0, 300.0));
        assert!(border.hit_test(405.0, 300.0));
        assert!(border.hit_test(395.0, 300.0));
        assert!(!border.hit_test(410.0, 300.0));
        assert!(!border.hit_test(400.0, -1.0));
        assert!(!border.hit_test(400.0, 601.0));
    }

    #[test]
    fn hit_test_vertical_border() {
        let border = border(Direction::Vertical, 300.0, 800.0);
        assert!(border.hit_test(400.0, 300.0));
        assert!(border.hit_test(400.0, 305.0));
        assert!(!border.hit_test(400.0, 310.0));
    }

    #[test]
    fn pixel_to_ratio_horizontal() {
        let border = border(Direction::Horizontal, 400.0, 600.0);
        // 80px = 10% of 800
        assert!((border.pixel_to_ratio(80.0) - 0.1).abs() < 0.001);
    }

    #[test]
    fn pixel_to_ratio_zero_span() {
        let mut border = border(Direction::Horizontal, 0.0, 0.0);
        border.bounds = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(border.pixel_to_ratio(100.0), 0.0);
        assert_eq!(border.ratio_at(10.0, 10.0), 0.5);
    }

    #[test]
    fn ratio_at_pointer() {
        let mut border = border(Direction::Vertical, 300.0, 800.0);
        border.bounds = Rect::new(0.0, 100.0, 800.0, 400.0);
        assert!((border.ratio_at(0.0, 200.0) - 0.25).abs() < 0.001);
        // Outside the region the raw ratio leaves the unit interval.
        assert!(border.ratio_at(0.0, 600.0) > 1.0);
    }
}
