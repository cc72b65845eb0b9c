//! Service configuration.
//!
//! Settings come from three layers, highest priority first: command-line
//! flags (and their environment variables), the optional TOML file, and
//! built-in defaults.

mod io;
mod types;

pub use io::{default_config_path, load_config_file, read_config_file};
pub use types::{
    ConfigError, FileConfig, ServerSection, Settings, DEFAULT_ADDR, DEFAULT_LINKS_FILE,
    DEFAULT_SERVICE_URL, DEFAULT_TITLE, DEFAULT_USERS_FILE,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
