//! Command-line interface for the D-Bus proxy.
//!
//! Provides a hierarchical command system: commands are organized by
//! category (`dbus`, `config`) and help text is generated from their metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use commands::{
    config::{SchemaCommand, ShowCommand},
    dbus::{CallCommand, MethodsCommand},
};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
