//! busproxy - command-line front end for the D-Bus proxy.

use std::{env, error::Error, process};

use busproxy::{
    cli::{CliService, formatting::format_error},
    config::Config,
    tracing_config,
};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let config = Config::load()?;
    let log_guard = tracing_config::init(&config.general)?;
    debug!(?config, "Loaded configuration");

    let cli_service = CliService::new(config);

    let category = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    if matches!(category, "help" | "--help" | "-h") {
        println!("{}", cli_service.help());
        return Ok(());
    }

    let command = args.get(2).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(3..).unwrap_or(&[]);

    match cli_service
        .execute_command(category, command, command_args)
        .await
    {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            drop(log_guard);
            process::exit(1);
        }
    }
}
