use async_trait::async_trait;
use schemars::schema_for;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Command printing the JSON schema of the configuration file.
#[derive(Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Creates a new SchemaCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for SchemaCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = schema_for!(Config);

        serde_json::to_string_pretty(&schema)
            .map_err(|e| CliError::ConfigError(format!("Failed to render schema: {e}")))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON schema of config.toml".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["busproxy config schema > busproxy.schema.json".to_string()],
        }
    }
}
