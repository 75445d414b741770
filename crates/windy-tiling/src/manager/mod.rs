//! The LayoutManager owns the tiled tree, the floating list and the
//! maximized pane, and notifies subscribers after every applied change.

mod layout_compute;
mod operations;
mod panes;
mod types;


pub use types::*;
