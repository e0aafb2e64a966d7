//! Commands that connect to a remote object and call it.
mod call;
mod methods;

use std::sync::Arc;

pub use call::CallCommand;
pub use methods::MethodsCommand;

use crate::{
    cli::{CliError, CommandRegistry},
    config::Config,
    dbus::{DbusProxy, GdbusCommand, ProcessTransport},
};

/// Registers the "dbus" category commands.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config` - Configuration providing the `gdbus` settings
pub fn register_commands(registry: &mut CommandRegistry, config: Arc<Config>) {
    const CATEGORY_NAME: &str = "dbus";

    registry.register_command(
        CATEGORY_NAME,
        Box::new(MethodsCommand::new(config.clone())),
    );
    registry.register_command(CATEGORY_NAME, Box::new(CallCommand::new(config)));
}

/// Connects a proxy using the configured `gdbus` program and bus.
///
/// `args` must start with the bus name and object path.
async fn connect(config: &Config, args: &[String]) -> Result<DbusProxy, CliError> {
    let (Some(bus_name), Some(object_path)) = (args.first(), args.get(1)) else {
        return Err(CliError::InvalidArguments(
            "Expected <bus> and <path> arguments".to_string(),
        ));
    };

    let proxy = DbusProxy::connect_with(
        Arc::new(ProcessTransport::new()),
        GdbusCommand::from(&config.gdbus),
        bus_name,
        object_path,
    )
    .await?;

    Ok(proxy)
}
