mod operations;
mod traversal;
mod types;

pub use traversal::NodeMatch;
pub use types::*;
