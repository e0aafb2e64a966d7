use std::sync::Arc;

use crate::config::Config;

use super::{
    CliError, CommandRegistry,
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
        format_usage,
    },
};

/// High-level service for managing and executing CLI commands.
///
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `config` - Effective configuration shared by all commands
    pub fn new(config: Config) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(config));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the
    /// category, or whatever error the command itself produces.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        self.registry.execute(category, command_name, args).await
    }

    /// Lists all available commands as (category, command names) tuples.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Renders the top-level help text listing every command with its usage.
    pub fn help(&self) -> String {
        let mut out = format!(
            "{}\n\n{}\n  busproxy <category> <command> [args...]\n",
            format_header("busproxy - call methods on D-Bus objects through gdbus"),
            format_subheader("Usage:"),
        );

        for (category, commands) in self.list_all() {
            out.push_str(&format!("\n{}\n", format_category(&category)));

            for command in commands {
                let Ok(metadata) = self.registry.metadata(&category, &command) else {
                    continue;
                };

                let args: Vec<String> = metadata
                    .args
                    .iter()
                    .map(|arg| {
                        let name = if arg.variadic {
                            format!("{}...", arg.name)
                        } else {
                            arg.name.clone()
                        };
                        if arg.required {
                            format!("<{name}>")
                        } else {
                            format!("[{name}]")
                        }
                    })
                    .collect();

                out.push_str(&format!(
                    "  {} {}  {}\n",
                    format_command(&command),
                    args.join(" "),
                    format_description(&metadata.description),
                ));

                for example in &metadata.examples {
                    out.push_str(&format!("      {}\n", format_usage(example)));
                }
            }
        }

        out
    }
}
