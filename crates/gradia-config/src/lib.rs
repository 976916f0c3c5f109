//! Gradia configuration system.
//!
//! Provides TOML-based picker configuration with validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gradia_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{GradiaConfig, GradientSection, StopConfig, TrackConfig};
pub use toml_loader::{load_from_path, CONFIG_PATH_ENV};

use gradia_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a default file if none exists.
pub fn load_config() -> Result<GradiaConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<GradiaConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from `path`, or from the default location when
/// `None`. A missing file yields defaults and nothing is written to disk.
pub fn load_config_or_default(path: Option<&Path>) -> Result<GradiaConfig, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => toml_loader::default_config_path()?,
    };
    match load_config_from(&path) {
        Err(ConfigError::FileNotFound(_)) => Ok(GradiaConfig::default()),
        other => other,
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GradiaConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
