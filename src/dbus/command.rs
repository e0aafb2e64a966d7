use crate::config::{BusType, GdbusConfig};

use super::{DbusError, ObjectAddress};

/// Formats the `gdbus` command lines used to introspect and call an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdbusCommand {
    program: String,
    bus: BusType,
}

impl GdbusCommand {
    /// Creates a formatter for the given `gdbus` executable and message bus
    pub fn new(program: impl Into<String>, bus: BusType) -> Self {
        Self {
            program: program.into(),
            bus,
        }
    }

    /// Executable that commands are addressed to
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Message bus the commands connect to
    pub fn bus(&self) -> BusType {
        self.bus
    }

    /// `gdbus introspect <--system/--session> --dest <bus> --object-path <path> --xml`
    pub fn introspect(&self, address: &ObjectAddress) -> Vec<String> {
        let mut command = self.prefix("introspect", address);
        command.push("--xml".to_string());
        command
    }

    /// `gdbus call <--system/--session> --dest <bus> --object-path <path> --method <path>.<method> <args>`
    ///
    /// `args` is the space-joined argument segment. It is split with shell
    /// word rules, so quoting supplied by the caller is honoured and nothing
    /// else is escaped.
    ///
    /// # Errors
    /// Returns `DbusError::InvalidArguments` if `args` has unbalanced quotes
    /// or a trailing escape.
    pub fn call(
        &self,
        address: &ObjectAddress,
        method: &str,
        args: &str,
    ) -> Result<Vec<String>, DbusError> {
        let tokens = shlex::split(args).ok_or_else(|| DbusError::InvalidArguments {
            method: method.to_string(),
            reason: format!("cannot split '{args}' into shell words"),
        })?;

        let mut command = self.prefix("call", address);
        command.push("--method".to_string());
        command.push(address.qualify(method));
        command.extend(tokens);

        Ok(command)
    }

    fn prefix(&self, subcommand: &str, address: &ObjectAddress) -> Vec<String> {
        vec![
            self.program.clone(),
            subcommand.to_string(),
            self.bus.flag().to_string(),
            "--dest".to_string(),
            address.bus_name().to_string(),
            "--object-path".to_string(),
            address.object_path().to_string(),
        ]
    }
}

impl Default for GdbusCommand {
    fn default() -> Self {
        Self::from(&GdbusConfig::default())
    }
}

impl From<&GdbusConfig> for GdbusCommand {
    fn from(config: &GdbusConfig) -> Self {
        Self::new(config.program.clone(), config.bus)
    }
}
