pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, WindyError};
pub use events::{EventBus, PaneEvent};
pub use types::{ContentType, NodeId, Rect};

pub type Result<T> = std::result::Result<T, WindyError>;
