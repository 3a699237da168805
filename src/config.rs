//! Tool configuration module.
//!
//! Handles loading and validating an optional `iconize.toml` next to the
//! project. Both values can also be overridden per-invocation on the CLI
//! (`--source`, `--size`), which takes priority over the file.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source = "src/icon.png"   # Source icon to resize
//! sizes = [16, 48, 128]     # Square pixel sizes to generate
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
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

/// Tool configuration loaded from `iconize.toml`.
///
/// All fields have defaults. A config file needs only the values it wants
/// to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Path to the source icon.
    pub source: PathBuf,
    /// Square pixel sizes to generate, in output order.
    pub sizes: Vec<u32>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("src/icon.png"),
            sizes: vec![16, 48, 128],
        }
    }
}

impl IconConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Validation("sizes must not be empty".into()));
        }
        if self.sizes.iter().any(|&s| s == 0) {
            return Err(ConfigError::Validation(
                "sizes must be positive pixel dimensions".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from the given path, falling back to defaults when the file
/// does not exist. A file that exists but fails to parse or validate is an
/// error — silently ignoring a broken config would mask typos.
pub fn load_config(path: &Path) -> Result<IconConfig, ConfigError> {
    if !path.exists() {
        return Ok(IconConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: IconConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `iconize.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# iconize Configuration
# =====================
# All settings are optional. Values shown below are the defaults.
# CLI flags (--source, --size) override this file per invocation.

# Source icon to resize. Outputs are written next to it as
# <stem>-<size>.<extension>, e.g. src/icon-48.png.
source = "src/icon.png"

# Square pixel sizes to generate, in output order.
sizes = [16, 48, 128]
"##
}
