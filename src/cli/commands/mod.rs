/// Configuration inspection commands
pub mod config;
/// Remote object commands
pub mod dbus;
