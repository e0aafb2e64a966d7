use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
    dbus::Arg,
};

use super::connect;

/// Command that calls a method on a remote object and prints the raw reply.
///
/// Each argument after the method name reaches `gdbus` as exactly one word of
/// GVariant text, so strings need their own quotes:
///
/// ```bash
/// busproxy dbus call org.freedesktop.hostname1 /org/freedesktop/hostname1 SetStaticHostname "'desk'" true
/// ```
pub struct CallCommand {
    config: Arc<Config>,
}

impl CallCommand {
    /// Creates a new CallCommand using the given configuration
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for CallCommand {
    /// Connects, calls the method and returns the reply unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Dbus` if connecting fails, the method is unknown,
    /// or the call itself fails.
    async fn execute(&self, args: &[String]) -> CommandResult {
        let method = args.get(2).ok_or_else(|| {
            CliError::InvalidArguments("Expected <method> argument for 'call'".to_string())
        })?;

        let proxy = connect(&self.config, args).await?;

        // Already split by the user's shell; quote so each survives re-splitting intact.
        let quoted = args[3..]
            .iter()
            .map(|arg| {
                shlex::try_quote(arg)
                    .map(|quoted| quoted.into_owned())
                    .map_err(|e| CliError::InvalidArguments(format!("{arg:?}: {e}")))
            })
            .collect::<Result<Vec<String>, CliError>>()?;
        let call_args: Vec<Arg<'_>> = quoted.iter().map(|arg| arg as Arg<'_>).collect();
        let reply = proxy.call(method, &call_args).await?;

        Ok(reply.trim_end().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "call".to_string(),
            description: "Call a method on a remote object".to_string(),
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
                CommandArg {
                    name: "method".to_string(),
                    description: "Method name as listed by 'dbus methods'".to_string(),
                    required: true,
                    variadic: false,
                    value_type: ArgType::Method,
                },
                CommandArg {
                    name: "args".to_string(),
                    description: "Positional arguments in GVariant text form".to_string(),
                    required: false,
                    variadic: true,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "busproxy dbus call org.freedesktop.login1 /org/freedesktop/login1 ListSessions"
                    .to_string(),
                "busproxy dbus call org.freedesktop.hostname1 /org/freedesktop/hostname1 SetStaticHostname \"'desk'\" true"
                    .to_string(),
            ],
        }
    }
}
