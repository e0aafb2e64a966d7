//! Unit tests for CLI module
//!
//! Tests command registry, argument validation and the commands that need no
//! running bus.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::sync::Arc;

use crate::{
    cli::{CliError, CliService, CommandRegistry, formatting::format_method_list},
    config::Config,
    dbus::DbusError,
};

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn format_method_list_keeps_order() {
    let names = strings(&["Introspect", "Foo", "Bar"]);

    assert_eq!(format_method_list(&names), "Introspect\nFoo\nBar");
    assert_eq!(format_method_list(&[]), "");
}

#[test]
fn command_registry_starts_empty() {
    let registry = CommandRegistry::new(Arc::new(Config::default()));

    assert!(registry.list_commands().is_empty());
}

#[test]
fn command_registry_lists_sorted_categories() {
    let service = CliService::new(Config::default());

    assert_eq!(
        service.list_all(),
        vec![
            ("config".to_string(), strings(&["schema", "show"])),
            ("dbus".to_string(), strings(&["call", "methods"])),
        ]
    );
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let service = CliService::new(Config::default());

    let result = service.execute_command("audio", "volume", &[]).await;

    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[tokio::test]
async fn unknown_command_is_not_found() {
    let service = CliService::new(Config::default());

    let result = service.execute_command("dbus", "monitor", &[]).await;

    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[tokio::test]
async fn call_requires_bus_path_and_method() {
    let service = CliService::new(Config::default());

    let result = service
        .execute_command("dbus", "call", &strings(&["org.example.Test", "/org/example/Test"]))
        .await;

    match result {
        Err(CliError::InvalidArguments(message)) => {
            assert_eq!(message, "Expected at least 3 arguments, got 2")
        }
        other => panic!("expected invalid arguments, got {other:?}"),
    }
}

#[tokio::test]
async fn methods_rejects_extra_arguments() {
    let service = CliService::new(Config::default());

    let result = service
        .execute_command(
            "dbus",
            "methods",
            &strings(&["org.example.Test", "/org/example/Test", "extra"]),
        )
        .await;

    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn invalid_object_path_surfaces_dbus_error() {
    let service = CliService::new(Config::default());

    let result = service
        .execute_command("dbus", "methods", &strings(&["org.example.Test", "relative"]))
        .await;

    assert!(matches!(
        result,
        Err(CliError::Dbus(DbusError::InvalidAddress { .. }))
    ));
}

#[tokio::test]
async fn config_show_prints_toml() {
    let service = CliService::new(Config::default());

    let output = service.execute_command("config", "show", &[]).await.unwrap();

    assert!(output.contains("[gdbus]"));
    assert!(output.contains("program = \"gdbus\""));
}

#[tokio::test]
async fn config_schema_prints_json() {
    let service = CliService::new(Config::default());

    let output = service
        .execute_command("config", "schema", &[])
        .await
        .unwrap();
    let schema: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(schema["properties"]["gdbus"].is_object());
}

#[test]
fn help_lists_every_command() {
    let help = CliService::new(Config::default()).help();

    for command in ["call", "methods", "show", "schema"] {
        assert!(help.contains(command), "help is missing {command}");
    }
    assert!(help.contains("args..."));
}
