mod log_level;

pub use log_level::LogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// General configuration settings for busproxy.
///
/// Contains global settings that affect the overall behavior of the application,
/// such as logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Logging level used when `RUST_LOG` is not set.
    pub log_level: LogLevel,

    /// Whether logs are also written to daily rotated files under `~/.busproxy/logs`.
    pub log_to_file: bool,
}
