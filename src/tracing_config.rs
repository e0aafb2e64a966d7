//! Tracing subscriber setup for the busproxy binary.

use std::{env, error::Error, io};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{Builder, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ConfigPaths, GeneralConfig};

const DAYS_TO_KEEP: usize = 7;

/// Initialize tracing for the application
///
/// Uses `RUST_LOG` if set, otherwise the configured log level. Console output
/// goes to stderr so stdout only carries command results. `BUSPROXY_LOG_FORMAT=json`
/// switches to JSON lines. When `log_to_file` is enabled logs are also written
/// to a daily rotated file; keep the returned guard alive until exit so
/// buffered lines are flushed.
///
/// # Errors
/// Returns error if the log directory cannot be created or a subscriber is
/// already installed
pub fn init(general: &GeneralConfig) -> Result<Option<WorkerGuard>, Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(general.log_level.to_string()));
    let json = env::var("BUSPROXY_LOG_FORMAT").is_ok_and(|format| format == "json");

    let (file_writer, guard) = if general.log_to_file {
        let file_appender = Builder::new()
            .rotation(Rotation::DAILY)
            .max_log_files(DAYS_TO_KEEP)
            .filename_prefix("busproxy")
            .filename_suffix("log")
            .build(ConfigPaths::log_dir()?)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        (Some(non_blocking), Some(guard))
    } else {
        (None, None)
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .with(file_writer.map(|writer| {
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(writer)
                    .with_ansi(false)
            }))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .with(file_writer.map(|writer| {
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(writer)
                    .with_ansi(false)
            }))
            .try_init()?;
    }

    Ok(guard)
}
