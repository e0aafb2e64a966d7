//! Unit tests for config module
//!
//! Tests configuration types, defaults, and TOML loading.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;
use tracing_subscriber::filter::LevelFilter;

use crate::{
    BusProxyError,
    config::{BusType, Config, LogLevel},
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert!(!config.general.log_to_file);
    assert_eq!(config.gdbus.program, "gdbus");
    assert_eq!(config.gdbus.bus, BusType::System);
}

#[test]
fn config_serialize_toml() {
    let toml_str = Config::default().to_toml().unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[gdbus]"));
    assert!(toml_str.contains("bus = \"system\""));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [gdbus]
        program = "/usr/bin/gdbus"
        bus = "session"
    "#;

    let config = Config::from_toml(toml_str, None).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.gdbus.program, "/usr/bin/gdbus");
    assert_eq!(config.gdbus.bus, BusType::Session);
}

#[test]
fn config_partial_sections_use_defaults() {
    let config = Config::from_toml("[gdbus]\nbus = \"session\"\n", None).unwrap();

    assert_eq!(config.gdbus.program, "gdbus");
    assert_eq!(config.general, Default::default());
}

#[test]
fn config_invalid_value_reports_location() {
    let result = Config::from_toml("[gdbus]\nbus = \"usb\"\n", None);

    match result {
        Err(BusProxyError::TomlParseError { location, .. }) => assert_eq!(location, "string"),
        other => panic!("expected TOML parse error, got {other:?}"),
    }
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[general]\nlog_level = \"trace\"\nlog_to_file = true\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Trace);
    assert!(config.general.log_to_file);
}

#[test]
fn bus_type_flags() {
    assert_eq!(BusType::System.flag(), "--system");
    assert_eq!(BusType::Session.flag(), "--session");
    assert_eq!(BusType::Session.to_string(), "session");
}

#[test]
fn log_level_maps_to_filter() {
    assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::WARN);
    assert_eq!(LogLevel::Debug.to_string(), "debug");
}
