use std::{fs, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigPaths};
use crate::{BusProxyError, Result};

impl Config {
    /// Loads the main configuration file from the XDG config directory.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_from(&path)
    }

    /// Loads a configuration file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("No config file found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| BusProxyError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::from_toml(&content, Some(path))
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns `BusProxyError::TomlParseError` if the text is not a valid configuration.
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<Config> {
        toml::from_str(content).map_err(|e| BusProxyError::toml_parse(e, path))
    }

    /// Serializes the configuration to TOML text.
    ///
    /// # Errors
    /// Returns `BusProxyError::Config` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| BusProxyError::Config(format!("Failed to serialize config: {e}")))
    }
}
