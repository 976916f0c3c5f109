//! Config path resolution and default file creation.

use gradia_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Environment variable that overrides the default config location.
pub const CONFIG_PATH_ENV: &str = "GRADIA_CONFIG";

/// Resolve the config file path: `$GRADIA_CONFIG` if set and non-empty,
/// otherwise `gradia/config.toml` under the OS config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("gradia").join("config.toml"))
}

/// Write the documented default config to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| write_err("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| write_err("write default config to", path, e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
