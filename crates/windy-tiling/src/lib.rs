pub mod commands;
pub mod layout;
pub mod manager;
pub mod pane;
pub mod tree;

pub use commands::LayoutCommand;
pub use layout::LayoutEngine;
pub use manager::{LayoutManager, LayoutSnapshot, SubscriptionId};
pub use pane::Pane;
pub use tree::{Direction, LayoutNode, NodeMatch, Side, Split};
