//! TOML config loading: from a string, a path, or the platform default.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use windy_common::ConfigError;

use crate::schema::WindyConfig;
use crate::validation;

/// Parse and validate a TOML document.
pub fn load_from_str(content: &str) -> Result<WindyConfig, ConfigError> {
    let config: WindyConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<WindyConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Get the platform-specific default config file path.
///
/// On Linux: `~/.config/windy/windy.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("windy").join("windy.toml"))
}

/// Load config from the platform default path, or defaults if there is no file.
pub fn load_default() -> Result<WindyConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config at {}, using defaults", path.display());
            Ok(WindyConfig::default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("windy.toml");
        std::fs::write(
            &path,
            r#"
[tiling]
min_ratio = 0.1
max_ratio = 0.9
gap = 6

[viewport]
width = 1280.0
height = 720.0
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert!((config.tiling.min_ratio - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.tiling.gap, 6);
        assert!((config.viewport.width - 1280.0).abs() < f64::EPSILON);
        // Defaults preserved
        assert!((config.floating.width - 400.0).abs() < f64::EPSILON);
        assert_eq!(config.event_capacity, 64);
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("windy.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_out_of_range_returns_validation_error() {
        let err = load_from_str("[tiling]\nmax_ratio = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref m) if m.contains("tiling.max_ratio")));
    }

    #[test]
    fn empty_document_is_default() {
        let config = load_from_str("").unwrap();
        assert!((config.tiling.default_ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn default_path_ends_with_windy_toml() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("windy/windy.toml"));
        }
    }
}
