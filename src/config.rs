//! Batch configuration.
//!
//! Settings are layered: stock defaults are overridden by an optional TOML
//! file (`--config`), which is overridden by command-line flags. The result
//! is immutable for the whole run.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! resolution = [1920, 1080]     # Target width, height in pixels
//! max_factor_change = 0.1       # Allowed aspect-ratio deviation before cropping
//! delete_existing_output = false  # Remove the output folder before writing
//! verbose = false               # Per-image decision details + timing
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::Dimensions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Every output image is resized to exactly this size.
    pub resolution: Dimensions,
    /// Largest relative aspect-ratio change accepted without cropping.
    pub max_factor_change: f64,
    /// Recursively delete the output folder before writing.
    pub delete_existing_output: bool,
    /// Print per-image decisions and a final timing summary.
    pub verbose: bool,
}

pub const DEFAULT_RESOLUTION: Dimensions = Dimensions {
    width: 1920,
    height: 1080,
};

pub const DEFAULT_MAX_FACTOR_CHANGE: f64 = 0.1;

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            max_factor_change: DEFAULT_MAX_FACTOR_CHANGE,
            delete_existing_output: false,
            verbose: false,
        }
    }
}

impl BatchConfig {
    /// Load a config file on top of the stock defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: BatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution.width == 0 || self.resolution.height == 0 {
            return Err(ConfigError::Validation(
                "resolution values must be non-zero".into(),
            ));
        }
        if !self.max_factor_change.is_finite() || self.max_factor_change < 0.0 {
            return Err(ConfigError::Validation(
                "max_factor_change must be a finite number >= 0".into(),
            ));
        }
        Ok(())
    }
}

/// Parse a `W,H` resolution such as `1920,1080`.
///
/// Whitespace around either number is ignored. Used as the clap value parser
/// for `--resolution`, so errors are shown alongside the usage text.
pub fn parse_resolution(value: &str) -> Result<Dimensions, String> {
    let (w, h) = value
        .split_once(',')
        .ok_or_else(|| format!("expected WIDTH,HEIGHT, got '{value}'"))?;
    let parse = |part: &str, name: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid {name} '{}': {e}", part.trim()))
    };
    let dims = Dimensions::new(parse(w, "width")?, parse(h, "height")?);
    if dims.width == 0 || dims.height == 0 {
        return Err(format!("resolution must be non-zero, got '{value}'"));
    }
    Ok(dims)
}

/// Stock config file with every option at its default, documented.
pub fn stock_config_toml() -> String {
    let defaults = BatchConfig::default();
    format!(
        "\
# resize-crop configuration
# All options are optional; command-line flags override this file.

# Target resolution [width, height]; every output has exactly this size.
resolution = [{w}, {h}]

# Maximum allowed aspect-ratio change, |source - target| / target.
# Images within it are stretched; others get a centered crop first.
max_factor_change = {factor:?}

# Remove the output folder (recursively) before writing.
delete_existing_output = {delete}

# Print per-image crop decisions and total execution time.
verbose = {verbose}
",
        w = defaults.resolution.width,
        h = defaults.resolution.height,
        factor = defaults.max_factor_change,
        delete = defaults.delete_existing_output,
        verbose = defaults.verbose,
    )
}
