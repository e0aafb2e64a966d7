use std::io;

/// Errors produced while connecting to or calling a remote D-Bus object.
///
/// Transport failures are split into [`DbusError::Fatal`] (nothing ran) and
/// [`DbusError::ReturnCode`] (the tool ran and reported failure) so callers
/// can tell an unreachable bus from a refused call.
#[derive(thiserror::Error, Debug)]
pub enum DbusError {
    /// The external command could not be spawned at all
    #[error("D-Bus fatal error running '{program}': {source}")]
    Fatal {
        /// Program that failed to launch
        program: String,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// The external command ran but exited unsuccessfully
    #[error("D-Bus command '{program}' failed with {}", describe_code(.code))]
    ReturnCode {
        /// Program that exited non-zero
        program: String,
        /// Exit code, `None` when the process was killed by a signal
        code: Option<i32>,
    },

    /// Introspection data could not be parsed
    #[error("Can't parse introspect data for {path}: {details}")]
    Parse {
        /// Object path that was introspected
        path: String,
        /// Parser error details
        details: String,
    },

    /// Method was not discovered during introspection
    #[error("Method '{method}' not found on {path}")]
    UnknownMethod {
        /// Requested method name
        method: String,
        /// Object path of the proxy
        path: String,
    },

    /// Bus name or object path is not valid D-Bus syntax
    #[error("Invalid D-Bus {kind} '{value}': {reason}")]
    InvalidAddress {
        /// Which part of the address was rejected ("bus name" or "object path")
        kind: &'static str,
        /// Rejected value
        value: String,
        /// Validation failure reason
        reason: String,
    },

    /// Call arguments could not be split into shell words
    #[error("Invalid arguments for {method}: {reason}")]
    InvalidArguments {
        /// Method the arguments were meant for
        method: String,
        /// Reason the arguments were rejected
        reason: String,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "termination by signal".to_string(),
    }
}
