use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::format_method_list,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
};

use super::connect;

/// Command listing the methods a remote object declares.
///
/// ```bash
/// busproxy dbus methods org.freedesktop.hostname1 /org/freedesktop/hostname1
/// ```
pub struct MethodsCommand {
    config: Arc<Config>,
}

impl MethodsCommand {
    /// Creates a new MethodsCommand using the given configuration
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for MethodsCommand {
    /// Introspects the object and prints one method name per line.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Dbus` if introspection cannot run or its output
    /// cannot be parsed.
    async fn execute(&self, args: &[String]) -> CommandResult {
        let proxy = connect(&self.config, args).await?;

        Ok(format_method_list(proxy.methods().names()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "methods".to_string(),
            description: "List the methods of a remote object".to_string(),
            category: "dbus".to_string(),
            args: vec![
                CommandArg {
                    name: "bus".to_string(),
                    description: "Bus name owning the object".to_string(),
                    required: true,
                    variadic: false,
                    value_type: ArgType::BusName,
                },
                CommandArg {
                    name: "path".to_string(),
                    description: "Object path".to_string(),
                    required: true,
                    variadic: false,
                    value_type: ArgType::ObjectPath,
                },
            ],
            examples: vec![
                "busproxy dbus methods org.freedesktop.hostname1 /org/freedesktop/hostname1"
                    .to_string(),
            ],
        }
    }
}
