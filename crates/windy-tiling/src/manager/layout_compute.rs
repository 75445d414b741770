//! Layout computation and command dispatch for LayoutManager.

use windy_common::{NodeId, Rect};

use crate::commands::LayoutCommand;
use crate::layout::{compute_borders, SplitBorder};

use super::LayoutManager;

impl LayoutManager {
    /// Execute a layout command. Returns `true` if the layout changed.
    pub fn execute(&mut self, cmd: LayoutCommand) -> bool {
        match cmd {
            LayoutCommand::Create {
                title,
                direction,
                ratio,
                parent,
                content_type,
            } => {
                let before = self.version;
                self.create(title, direction, ratio, parent, content_type);
                self.version != before
            }
            LayoutCommand::Split {
                target,
                title,
                direction,
                content_type,
            } => {
                let pane = self.create_pane(title, content_type);
                let ratio = self.config.tiling.default_ratio;
                self.split(target, pane, direction, ratio)
            }
            LayoutCommand::Close { target } => self.close(target),
            LayoutCommand::Float { target } => self.float(target),
            LayoutCommand::Snap {
                target,
                parent,
                direction,
            } => self.snap(target, parent, direction),
            LayoutCommand::Hide { target } => self.hide(target),
            LayoutCommand::Show { target } => self.show(target),
            LayoutCommand::SetRatio { split, ratio } => self.set_ratio(split, ratio),
            LayoutCommand::Resize { split, ratio } => self.resize(split, ratio),
            LayoutCommand::SetContentType {
                target,
                content_type,
            } => self.set_content_type(target, content_type),
            LayoutCommand::SetFloatingBounds { target, bounds } => {
                self.set_floating_bounds(target, bounds)
            }
            LayoutCommand::Maximize { target } => self.maximize(target),
            LayoutCommand::Restore => self.restore(),
            LayoutCommand::Clear => {
                self.clear();
                true
            }
        }
    }

    /// Compute the tiled layout within the given viewport.
    /// If a pane is maximized, it fills the entire viewport on its own.
    pub fn compute_layout(&self, viewport: Rect) -> Vec<(NodeId, Rect)> {
        if let Some(maximized) = self.maximized {
            return vec![(maximized, viewport)];
        }
        match &self.root {
            Some(root) => self.layout_engine.compute(root, viewport),
            None => Vec::new(),
        }
    }

    /// Draggable dividers within the given viewport. None while maximized.
    pub fn compute_borders(&self, viewport: Rect) -> Vec<SplitBorder> {
        match (&self.root, self.maximized) {
            (Some(root), None) => compute_borders(root, viewport, self.layout_engine.gap as f64),
            _ => Vec::new(),
        }
    }
}
