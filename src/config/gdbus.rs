use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Message bus a remote object lives on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusType {
    /// The machine-wide system bus.
    #[default]
    System,

    /// The bus of the current login session.
    Session,
}

impl BusType {
    /// Command-line flag selecting this bus in `gdbus`
    pub fn flag(self) -> &'static str {
        match self {
            BusType::System => "--system",
            BusType::Session => "--session",
        }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusType::System => write!(f, "system"),
            BusType::Session => write!(f, "session"),
        }
    }
}

/// Settings for the `gdbus` tool that carries introspection and method calls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct GdbusConfig {
    /// Executable name or path of the `gdbus` tool.
    pub program: String,

    /// Message bus to connect to.
    pub bus: BusType,
}

impl Default for GdbusConfig {
    fn default() -> Self {
        Self {
            program: "gdbus".to_string(),
            bus: BusType::System,
        }
    }
}
