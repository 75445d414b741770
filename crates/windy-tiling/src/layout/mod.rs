pub mod borders;
mod calculation;
mod types;

pub use borders::{compute_borders, SplitBorder};
pub use types::*;
