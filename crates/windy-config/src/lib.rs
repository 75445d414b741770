//! Windy configuration.
//!
//! TOML-backed settings for the layout manager: the interactive resize
//! band, the default ratio for new splits, floating pane geometry, the
//! initial viewport, and the gap between tiled panes. Every section uses
//! serde defaults, so a partial file (or none at all) works.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_config_path, load_default, load_from_path, load_from_str};
pub use schema::{FloatingConfig, TilingConfig, ViewportConfig, WindyConfig};
pub use validation::validate;

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WindyConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
