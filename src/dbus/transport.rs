use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, instrument};

use super::DbusError;

/// Executes one tokenized command line and returns its standard output.
///
/// Implementations must not retry. A command that cannot be started is a
/// [`DbusError::Fatal`]; a command that ran and exited non-zero is a
/// [`DbusError::ReturnCode`] and its output is discarded.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Runs `command` to completion.
    ///
    /// # Errors
    /// Returns `DbusError::Fatal` if the process cannot be spawned and
    /// `DbusError::ReturnCode` if it exits unsuccessfully.
    async fn run(&self, command: &[String]) -> Result<String, DbusError>;
}

/// Transport that spawns each command as a child process.
///
/// The child gets an empty stdin and a discarded stderr; stdout is captured in
/// full and the child is always reaped before `run` returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTransport;

impl ProcessTransport {
    /// Creates a process transport
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for ProcessTransport {
    #[instrument(skip(self), fields(program = command.first().map(String::as_str)))]
    async fn run(&self, command: &[String]) -> Result<String, DbusError> {
        let (program, args) = command.split_first().ok_or_else(|| DbusError::Fatal {
            program: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line"),
        })?;

        debug!(?args, "Spawning D-Bus command");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| {
                error!("DBus fatal error: {source}");
                DbusError::Fatal {
                    program: program.clone(),
                    source,
                }
            })?;

        if !output.status.success() {
            debug!(status = %output.status, "D-Bus command exited unsuccessfully");
            return Err(DbusError::ReturnCode {
                program: program.clone(),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
