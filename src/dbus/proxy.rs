use std::{fmt::Display, sync::Arc};

use tracing::{debug, error, info, instrument};

use super::{DbusError, GdbusCommand, MethodTable, ObjectAddress, ProcessTransport, Transport};

/// A positional call argument, rendered with its `Display` implementation
pub type Arg<'a> = &'a (dyn Display + Sync);

/// Local stand-in for a remote D-Bus object.
///
/// A proxy only exists once introspection has succeeded; its method table is
/// fixed from then on and gates every call. There is no reconnect: drop the
/// proxy and connect again to pick up a changed object.
///
/// ```rust,no_run
/// use busproxy::dbus::DbusProxy;
///
/// # async fn example() -> Result<(), busproxy::dbus::DbusError> {
/// let hostname = DbusProxy::connect("org.freedesktop.hostname1", "/org/freedesktop/hostname1").await?;
/// let reply = hostname.call("SetStaticHostname", &[&"'desk'", &true]).await?;
/// println!("{reply}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DbusProxy<T = ProcessTransport> {
    address: ObjectAddress,
    methods: MethodTable,
    command: GdbusCommand,
    transport: Arc<T>,
}

impl DbusProxy<ProcessTransport> {
    /// Connects to `object_path` on `bus_name` through the system bus `gdbus` tool.
    ///
    /// # Errors
    /// See [`DbusProxy::connect_with`].
    pub async fn connect(bus_name: &str, object_path: &str) -> Result<Self, DbusError> {
        Self::connect_with(
            Arc::new(ProcessTransport::new()),
            GdbusCommand::default(),
            bus_name,
            object_path,
        )
        .await
    }
}

impl<T: Transport> DbusProxy<T> {
    /// Connects using the given transport and command formatter.
    ///
    /// Runs a single introspection round trip and records every method the
    /// object declares.
    ///
    /// # Errors
    /// - `DbusError::InvalidAddress` if the bus name or object path is malformed
    /// - `DbusError::Fatal` / `DbusError::ReturnCode` if introspection fails to run
    /// - `DbusError::Parse` if the introspection output is not valid XML
    #[instrument(skip(transport, command))]
    pub async fn connect_with(
        transport: Arc<T>,
        command: GdbusCommand,
        bus_name: &str,
        object_path: &str,
    ) -> Result<Self, DbusError> {
        let address = ObjectAddress::new(bus_name, object_path)?;

        let data = transport
            .run(&command.introspect(&address))
            .await
            .inspect_err(|err| error!("DBus fails connect to {}: {err}", address.object_path()))?;

        let methods = MethodTable::from_introspection(&data, address.object_path())
            .inspect_err(|err| error!("{err}"))?;

        info!(methods = methods.len(), "Connect to dbus: {bus_name}");

        Ok(Self {
            address,
            methods,
            command,
            transport,
        })
    }

    /// Address of the remote object
    pub fn address(&self) -> &ObjectAddress {
        &self.address
    }

    /// Methods discovered at connect time
    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    /// Whether `name` can be called on this proxy
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains(name)
    }

    /// Looks up a discovered method and returns a handle bound to this proxy.
    ///
    /// # Errors
    /// Returns `DbusError::UnknownMethod` if `name` was not introspected.
    pub fn method(&self, name: &str) -> Result<BoundMethod<'_, T>, DbusError> {
        let name = self.methods.get(name).ok_or_else(|| self.unknown(name))?;

        Ok(BoundMethod { proxy: self, name })
    }

    /// Calls `method` with positional arguments and returns the raw reply.
    ///
    /// Arguments are rendered with `Display` and joined by single spaces; the
    /// result is split with shell word rules, so values containing whitespace
    /// or quotes must be quoted by the caller.
    ///
    /// # Errors
    /// - `DbusError::UnknownMethod` if `method` was not introspected; nothing is spawned
    /// - `DbusError::InvalidArguments` if the arguments cannot be split into words
    /// - `DbusError::Fatal` / `DbusError::ReturnCode` if the call fails to run
    pub async fn call(&self, method: &str, args: &[Arg<'_>]) -> Result<String, DbusError> {
        if !self.methods.contains(method) {
            return Err(self.unknown(method));
        }

        self.dispatch(method, args).await
    }

    #[instrument(skip(self, args), fields(path = self.address.object_path()))]
    async fn dispatch(&self, method: &str, args: &[Arg<'_>]) -> Result<String, DbusError> {
        let segment = args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let command = self.command.call(&self.address, method, &segment)?;
        debug!(args = %segment, "Calling D-Bus method");

        self.transport.run(&command).await.inspect_err(|err| {
            error!(
                "DBus fails with {method} on {}: {err}",
                self.address.object_path()
            )
        })
    }

    fn unknown(&self, method: &str) -> DbusError {
        DbusError::UnknownMethod {
            method: method.to_string(),
            path: self.address.object_path().to_string(),
        }
    }
}

/// A discovered method bound to its proxy, callable any number of times.
#[derive(Debug)]
pub struct BoundMethod<'a, T> {
    proxy: &'a DbusProxy<T>,
    name: &'a str,
}

impl<T: Transport> BoundMethod<'_, T> {
    /// Method name as declared by the remote object
    pub fn name(&self) -> &str {
        self.name
    }

    /// Calls the method with positional arguments.
    ///
    /// # Errors
    /// Same as [`DbusProxy::call`], minus `UnknownMethod`.
    pub async fn call(&self, args: &[Arg<'_>]) -> Result<String, DbusError> {
        self.proxy.dispatch(self.name, args).await
    }
}
