//! Client calls sent to the daemon

use super::{embed, from_bytes, to_bytes, unembed, HeaderOptions, Query, RemoteResource};
use crate::json::{DecodeError, JsonOptions};
use iotcon_core::{Representation, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One client call and its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Read the resource state
    Get {
        /// Target resource
        resource: RemoteResource,
        /// Query parameters
        query: Query,
    },
    /// Replace the resource state
    Put {
        /// Target resource
        resource: RemoteResource,
        /// New state
        representation: Representation,
        /// Query parameters
        query: Query,
    },
    /// Update the resource state
    Post {
        /// Target resource
        resource: RemoteResource,
        /// State to apply
        representation: Representation,
        /// Query parameters
        query: Query,
    },
    /// Delete the resource
    Delete {
        /// Target resource
        resource: RemoteResource,
    },
    /// Start observing the resource
    ObserveStart {
        /// Target resource
        resource: RemoteResource,
        /// Observe type
        observe_type: i32,
        /// Query parameters
        query: Query,
        /// Signal number notifications are delivered on
        signal_number: u32,
    },
    /// Stop an observation
    ObserveStop {
        /// Handle returned when the observation started
        observe_handle: i64,
        /// Header options
        options: HeaderOptions,
    },
}

#[derive(Serialize, Deserialize)]
enum RequestWire {
    Get(RemoteResource, Query),
    Put(RemoteResource, String, Query),
    Post(RemoteResource, String, Query),
    Delete(RemoteResource),
    ObserveStart(RemoteResource, i32, Query, u32),
    ObserveStop(i64, HeaderOptions),
}

impl Request {
    /// Call name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            Request::Get { .. } => "get",
            Request::Put { .. } => "put",
            Request::Post { .. } => "post",
            Request::Delete { .. } => "delete",
            Request::ObserveStart { .. } => "observe_start",
            Request::ObserveStop { .. } => "observe_stop",
        }
    }

    /// Pack the call.
    ///
    /// Fails with [`iotcon_core::Error::Representation`] when the carried
    /// representation cannot be JSON-encoded.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let wire = match self {
            Request::Get { resource, query } => RequestWire::Get(resource.clone(), query.clone()),
            Request::Put {
                resource,
                representation,
                query,
            } => RequestWire::Put(resource.clone(), embed(representation)?, query.clone()),
            Request::Post {
                resource,
                representation,
                query,
            } => RequestWire::Post(resource.clone(), embed(representation)?, query.clone()),
            Request::Delete { resource } => RequestWire::Delete(resource.clone()),
            Request::ObserveStart {
                resource,
                observe_type,
                query,
                signal_number,
            } => RequestWire::ObserveStart(
                resource.clone(),
                *observe_type,
                query.clone(),
                *signal_number,
            ),
            Request::ObserveStop {
                observe_handle,
                options,
            } => RequestWire::ObserveStop(*observe_handle, options.clone()),
        };
        let bytes = to_bytes(&wire)?;
        debug!(call = self.name(), len = bytes.len(), "request encoded");
        Ok(bytes)
    }

    /// Unpack a call
    pub fn decode(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        Self::decode_with(bytes, &JsonOptions::default())
    }

    /// Unpack a call with explicit JSON options
    pub fn decode_with(bytes: &[u8], json_options: &JsonOptions) -> std::result::Result<Self, DecodeError> {
        Ok(match from_bytes(bytes)? {
            RequestWire::Get(resource, query) => Request::Get { resource, query },
            RequestWire::Put(resource, json, query) => Request::Put {
                resource,
                representation: unembed(&json, json_options)?,
                query,
            },
            RequestWire::Post(resource, json, query) => Request::Post {
                resource,
                representation: unembed(&json, json_options)?,
                query,
            },
            RequestWire::Delete(resource) => Request::Delete { resource },
            RequestWire::ObserveStart(resource, observe_type, query, signal_number) => {
                Request::ObserveStart {
                    resource,
                    observe_type,
                    query,
                    signal_number,
                }
            }
            RequestWire::ObserveStop(observe_handle, options) => Request::ObserveStop {
                observe_handle,
                options,
            },
        })
    }
}
