//! Introspecting proxy for remote D-Bus objects.
//!
//! Talks to the bus through the `gdbus` command-line tool: one process to
//! introspect an object when connecting, then one process per method call.
//! Replies are returned as the raw GVariant text printed by `gdbus`.

mod address;
mod command;
mod error;
mod introspection;
mod proxy;
mod transport;


pub use address::ObjectAddress;
pub use command::GdbusCommand;
pub use error::DbusError;
pub use introspection::MethodTable;
pub use proxy::{Arg, BoundMethod, DbusProxy};
pub use transport::{ProcessTransport, Transport};
