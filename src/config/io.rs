use super::types::{ConfigError, FileConfig};
use crate::logging::LINKSTASH_FOLDER;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Canonical location of the user config file (`~/.linkstash/config.toml`).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(LINKSTASH_FOLDER).join("config.toml"))
}

/// Read and parse a TOML config file.
pub fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load the config file.
///
/// An explicitly given path must exist. Without one, the default location is
/// tried and a missing file resolves to `FileConfig::default()`.
pub fn load_config_file(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config_file(path);
    }
    let Some(path) = default_config_path() else {
        warn!("Could not determine home directory; using default config");
        return Ok(FileConfig::default());
    };
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(FileConfig::default());
    }
    read_config_file(&path)
}
