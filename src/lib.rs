//! busproxy - call methods on D-Bus objects without generated bindings.
//!
//! A [`dbus::DbusProxy`] introspects a remote object once through the `gdbus`
//! tool and then exposes every method it declares as a callable operation.
//! Each call is a single `gdbus call` process whose standard output is
//! returned as the raw reply.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use busproxy::dbus::DbusProxy;
//!
//! # async fn example() -> Result<(), busproxy::dbus::DbusError> {
//! let login = DbusProxy::connect("org.freedesktop.login1", "/org/freedesktop/login1").await?;
//!
//! for method in login.methods().iter() {
//!     println!("{method}");
//! }
//!
//! let sessions = login.call("ListSessions", &[]).await?;
//! println!("{sessions}");
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Introspecting D-Bus proxy over the `gdbus` tool.
pub mod dbus;

/// Command-line interface.
pub mod cli;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use self::core::{BusProxyError, Result};
