//! Configuration schema definitions and loading.
//!
//! Defines the configuration structure for busproxy: general settings such as
//! logging, and how the `gdbus` tool is invoked. All configurations are
//! serializable to/from TOML format.

mod gdbus;
mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use gdbus::{BusType, GdbusConfig};
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for busproxy.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// How the `gdbus` command-line tool is invoked.
    #[serde(default)]
    pub gdbus: GdbusConfig,
}
