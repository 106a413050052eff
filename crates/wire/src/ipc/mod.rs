//! IPC payloads exchanged with the iotcon daemon
//!
//! Every payload is a fixed-shape tuple packed with `bincode`. Field order is
//! the contract. Representations never travel as structured trees: they are
//! embedded as compact JSON text and rebuilt with the JSON codec on arrival.
//!
//! | Payload | Fields |
//! |---------|--------|
//! | [`HeaderOptions`] | `[(id: u16, value: string)]` |
//! | [`Query`] | `[(key: string, value: string)]` |
//! | [`DeviceInfo`] | 12 strings, absent ones as `"(NULL)"` |
//! | [`RemoteResource`] | `(uri, host, is_observable, options, types, ifaces, observe_handle)` |
//! | [`CruResponse`] | `(options, representation, result)` |
//! | [`DeleteResponse`] | `(options, result)` |
//! | [`ObserveNotification`] | `(options, representation, result, sequence)` |
//! | [`NotifyMessage`] | `[(error_code, iface, representation)]`, zero or one entry |

mod device;
mod options;
mod query;
mod request;
mod resource;
mod response;

pub use device::DeviceInfo;
pub use options::HeaderOptions;
pub use query::Query;
pub use request::Request;
pub use resource::RemoteResource;
pub use response::{
    CruResponse, DeleteResponse, NotifyMessage, ObserveNotification, Reply, RESULT_OK,
};

use crate::json::{self, DecodeError, JsonOptions};
use iotcon_core::{Error, Representation, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

/// Placeholder carried for an absent string field
pub const NULL_STR: &str = "(NULL)";

/// Wire form of an optional string
pub fn encode_str(value: Option<&str>) -> String {
    value.unwrap_or(NULL_STR).to_string()
}

/// Read back an optional string; the placeholder means absent
pub fn decode_str(value: String) -> Option<String> {
    if value == NULL_STR {
        None
    } else {
        Some(value)
    }
}

/// Pack a payload into transport bytes
pub fn to_bytes<T: Serialize>(payload: &T) -> Result<Vec<u8>> {
    bincode::serialize(payload).map_err(|e| {
        error!(error = %e, "ipc payload encode failed");
        Error::OutOfMemory
    })
}

/// Unpack transport bytes into a payload
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> std::result::Result<T, DecodeError> {
    bincode::deserialize(bytes).map_err(|e| {
        error!(error = %e, len = bytes.len(), "ipc payload decode failed");
        DecodeError::Transport(e.to_string())
    })
}

/// Embed a representation as compact JSON
pub(crate) fn embed(repr: &Representation) -> Result<String> {
    json::encode(repr, false)
}

/// Rebuild an embedded representation
pub(crate) fn unembed(
    text: &str,
    options: &JsonOptions,
) -> std::result::Result<Representation, DecodeError> {
    json::decode_with(text, options)
}
