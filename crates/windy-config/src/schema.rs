//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};
use windy_common::Rect;

/// Top-level configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindyConfig {
    pub tiling: TilingConfig,
    pub floating: FloatingConfig,
    pub viewport: ViewportConfig,
    /// Buffered events per receiver on the trigger channel (valid range: 1-4096).
    pub event_capacity: u32,
}

/// Split behaviour for the tiled tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingConfig {
    /// Lower bound of the interactive resize band (valid range: 0.0-0.5, exclusive).
    pub min_ratio: f64,
    /// Upper bound of the interactive resize band (valid range: 0.5-1.0, exclusive).
    pub max_ratio: f64,
    /// Ratio given to the first child of a new split.
    pub default_ratio: f64,
    /// Gap between tiled panes in pixels (valid range: 0-64).
    pub gap: u32,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            min_ratio: 0.05,
            max_ratio: 0.95,
            default_ratio: 0.5,
            gap: 0,
        }
    }
}

impl TilingConfig {
    /// Clamp `ratio` into `[min_ratio, max_ratio]`. NaN maps to `default_ratio`.
    pub fn clamp_ratio(&self, ratio: f64) -> f64 {
        if ratio.is_nan() {
            return self.default_ratio;
        }
        ratio.max(self.min_ratio).min(self.max_ratio)
    }
}

/// Geometry assigned to a pane when it is floated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
        }
    }
}

/// Initial workspace area, used until the host reports its real size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl ViewportConfig {
    pub fn as_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl WindyConfig {
    /// Channel capacity for the trigger event bus, never zero.
    pub fn event_capacity(&self) -> usize {
        self.event_capacity.max(1) as usize
    }
}

impl Default for WindyConfig {
    fn default() -> Self {
        Self {
            tiling: TilingConfig::default(),
            floating: FloatingConfig::default(),
            viewport: ViewportConfig::default(),
            event_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiling_config_defaults() {
        let config = TilingConfig::default();
        assert!((config.min_ratio - 0.05).abs() < f64::EPSILON);
        assert!((config.max_ratio - 0.95).abs() < f64::EPSILON);
        assert!((config.default_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.gap, 0);
    }

    #[test]
    fn clamp_ratio_band() {
        let config = TilingConfig::default();
        assert!((config.clamp_ratio(0.0) - 0.05).abs() < f64::EPSILON);
        assert!((config.clamp_ratio(1.2) - 0.95).abs() < f64::EPSILON);
        assert!((config.clamp_ratio(0.3) - 0.3).abs() < f64::EPSILON);
        assert!((config.clamp_ratio(f64::NAN) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn tiling_config_partial_toml() {
        let config: TilingConfig = toml::from_str("gap = 4\nmin_ratio = 0.1").unwrap();
        assert_eq!(config.gap, 4);
        assert!((config.min_ratio - 0.1).abs() < f64::EPSILON);
        // Defaults preserved
        assert!((config.max_ratio - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn windy_config_partial_toml() {
        let config: WindyConfig = toml::from_str(
            r#"
[floating]
width = 640.0
"#,
        )
        .unwrap();
        assert!((config.floating.width - 640.0).abs() < f64::EPSILON);
        assert!((config.floating.height - 300.0).abs() < f64::EPSILON);
        assert_eq!(config.event_capacity, 64);
        assert_eq!(config.event_capacity(), 64);
    }

    #[test]
    fn event_capacity_never_zero() {
        let config = WindyConfig {
            event_capacity: 0,
            ..WindyConfig::default()
        };
        assert_eq!(config.event_capacity(), 1);
    }

    #[test]
    fn viewport_as_rect() {
        let viewport = ViewportConfig {
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(viewport.as_rect(), Rect::new(0.0, 0.0, 800.0, 600.0));
    }
}
