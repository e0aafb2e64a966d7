use std::fmt;

use zbus::{names::BusName, zvariant::ObjectPath};

use super::DbusError;

/// Location of a remote object: the bus name that owns it and its object path.
///
/// Both parts are validated against D-Bus naming rules on construction and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectAddress {
    bus_name: String,
    object_path: String,
}

impl ObjectAddress {
    /// Creates a validated address.
    ///
    /// # Errors
    /// Returns `DbusError::InvalidAddress` if the bus name or the object path
    /// is not valid D-Bus syntax.
    pub fn new(bus_name: &str, object_path: &str) -> Result<Self, DbusError> {
        BusName::try_from(bus_name).map_err(|err| DbusError::InvalidAddress {
            kind: "bus name",
            value: bus_name.to_string(),
            reason: err.to_string(),
        })?;

        ObjectPath::try_from(object_path).map_err(|err| DbusError::InvalidAddress {
            kind: "object path",
            value: object_path.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            bus_name: bus_name.to_string(),
            object_path: object_path.to_string(),
        })
    }

    /// Bus name owning the object, e.g. `org.freedesktop.hostname1`
    pub fn bus_name(&self) -> &str {
        &self.bus_name
    }

    /// Object path, e.g. `/org/freedesktop/hostname1`
    pub fn object_path(&self) -> &str {
        &self.object_path
    }

    /// Method identifier in the `<object path>.<method>` form passed to `gdbus call`
    pub fn qualify(&self, method: &str) -> String {
        format!("{}.{}", self.object_path, method)
    }
}

impl fmt::Display for ObjectAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bus_name, self.object_path)
    }
}
