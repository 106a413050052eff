//! Remote resource descriptor sent with every client call

use super::HeaderOptions;
use iotcon_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A resource discovered on a remote device.
///
/// Packed as `(uri, host, is_observable, options, types, ifaces,
/// observe_handle)`. Decoding runs the same checks as [`RemoteResource::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RemoteResourceWire", into = "RemoteResourceWire")]
pub struct RemoteResource {
    uri: String,
    host: String,
    is_observable: bool,
    options: HeaderOptions,
    types: Vec<String>,
    ifaces: i32,
    observe_handle: i64,
}

impl RemoteResource {
    /// Describe a resource at `host` + `uri`
    pub fn new(
        host: impl Into<String>,
        uri: impl Into<String>,
        is_observable: bool,
        types: Vec<String>,
        ifaces: i32,
    ) -> Result<Self> {
        let host = host.into();
        let uri = uri.into();
        if host.is_empty() || uri.is_empty() {
            return Err(Error::InvalidParameter(
                "remote resource needs a host and a uri".into(),
            ));
        }
        if types.iter().any(String::is_empty) {
            return Err(Error::InvalidParameter("empty resource type".into()));
        }
        Ok(RemoteResource {
            uri,
            host,
            is_observable,
            options: HeaderOptions::new(),
            types,
            ifaces,
            observe_handle: 0,
        })
    }

    /// Resource URI
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Host address
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether the resource accepts observers
    pub fn is_observable(&self) -> bool {
        self.is_observable
    }

    /// Resource types
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Interface bitmask
    pub fn ifaces(&self) -> i32 {
        self.ifaces
    }

    /// Header options sent with each call
    pub fn options(&self) -> &HeaderOptions {
        &self.options
    }

    /// Replace the header options sent with each call
    pub fn set_options(&mut self, options: HeaderOptions) {
        self.options = options;
    }

    /// Daemon handle of the active observation, 0 when not observing
    pub fn observe_handle(&self) -> i64 {
        self.observe_handle
    }

    /// Record the daemon handle of an active observation
    pub fn set_observe_handle(&mut self, handle: i64) {
        self.observe_handle = handle;
    }
}

#[derive(Serialize, Deserialize)]
struct RemoteResourceWire {
    uri: String,
    host: String,
    is_observable: bool,
    options: HeaderOptions,
    types: Vec<String>,
    ifaces: i32,
    observe_handle: i64,
}

impl TryFrom<RemoteResourceWire> for RemoteResource {
    type Error = Error;

    fn try_from(wire: RemoteResourceWire) -> Result<Self> {
        let mut resource =
            RemoteResource::new(wire.host, wire.uri, wire.is_observable, wire.types, wire.ifaces)?;
        resource.options = wire.options;
        resource.observe_handle = wire.observe_handle;
        Ok(resource)
    }
}

impl From<RemoteResource> for RemoteResourceWire {
    fn from(resource: RemoteResource) -> Self {
        RemoteResourceWire {
            uri: resource.uri,
            host: resource.host,
            is_observable: resource.is_observable,
            options: resource.options,
            types: resource.types,
            ifaces: resource.ifaces,
            observe_handle: resource.observe_handle,
        }
    }
}
