//! Configuration validation.
//!
//! Every check pushes a message instead of returning early, so a bad file
//! reports all of its problems at once.

use windy_common::ConfigError;

use crate::schema::WindyConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WindyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_tiling(&mut errors, config);
    validate_floating(&mut errors, config);

    validate_positive(&mut errors, "viewport.width", config.viewport.width);
    validate_positive(&mut errors, "viewport.height", config.viewport.height);
    validate_range(&mut errors, "event_capacity", config.event_capacity, 1, 4096);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_tiling(errors: &mut Vec<String>, config: &WindyConfig) {
    let tiling = &config.tiling;
    validate_open_range(errors, "tiling.min_ratio", tiling.min_ratio, 0.0, 0.5);
    validate_open_range(errors, "tiling.max_ratio", tiling.max_ratio, 0.5, 1.0);
    validate_range_f64(
        errors,
        "tiling.default_ratio",
        tiling.default_ratio,
        tiling.min_ratio,
        tiling.max_ratio,
    );
    validate_range(errors, "tiling.gap", tiling.gap, 0, 64);
}

fn validate_floating(errors: &mut Vec<String>, config: &WindyConfig) {
    validate_positive(errors, "floating.width", config.floating.width);
    validate_positive(errors, "floating.height", config.floating.height);
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    // NaN fails both comparisons, so test the accepted case.
    if !(value >= min && value <= max) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_open_range(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(value > min && value < max) {
        errors.push(format!("{name} = {value} is out of range ({min}, {max})"));
    }
}

fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !(value > 0.0 && value.is_finite()) {
        errors.push(format!("{name} = {value} must be a positive number"));
    }
}
