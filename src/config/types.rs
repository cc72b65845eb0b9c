use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LINKS_FILE: &str = "links.json";
pub const DEFAULT_USERS_FILE: &str = "users.txt";
pub const DEFAULT_SERVICE_URL: &str = "/";
pub const DEFAULT_TITLE: &str = "Links";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The `[server]` table. Every field is optional so the same shape doubles
/// as the set of command-line overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ServerSection {
    /// Fill every unset field from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            addr: self.addr.or(fallback.addr),
            links_file: self.links_file.or(fallback.links_file),
            users_file: self.users_file.or(fallback.users_file),
            service_url: self.service_url.or(fallback.service_url),
            templates_dir: self.templates_dir.or(fallback.templates_dir),
            title: self.title.or(fallback.title),
        }
    }
}

/// Contents of the TOML config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
}

/// Fully resolved settings the server runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub addr: String,
    pub links_file: PathBuf,
    pub users_file: PathBuf,
    pub service_url: String,
    pub templates_dir: Option<PathBuf>,
    pub title: String,
}

impl Settings {
    /// Merge command-line overrides over the file config, then apply defaults.
    #[must_use]
    pub fn resolve(overrides: ServerSection, file: FileConfig) -> Self {
        let merged = overrides.or(file.server);
        Self {
            addr: merged.addr.unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            links_file: merged
                .links_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LINKS_FILE)),
            users_file: merged
                .users_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_USERS_FILE)),
            service_url: merged
                .service_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
            templates_dir: merged.templates_dir,
            title: merged.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(ServerSection::default(), FileConfig::default())
    }
}
