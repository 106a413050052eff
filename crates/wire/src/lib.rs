//! Wire encoding for iotcon
//!
//! Two codecs sit on top of the representation model:
//!
//! - [`json`]: the network document format (`oc` / `href` / `rep` / `prop`)
//! - [`ipc`]: fixed-shape payloads for calls to the local daemon, carrying
//!   representations as embedded JSON text
//!
//! ## JSON Encoding Rules
//!
//! | Value Kind | JSON Encoding |
//! |------------|---------------|
//! | Int | integer literal |
//! | Bool | `true`/`false` |
//! | Double | number with a decimal point or exponent |
//! | String | `"..."` |
//! | Null | `null` |
//! | List | `[...]` |
//! | Representation | node object `{"href","rep","prop"}` |
//!
//! ## Examples
//!
//! ```
//! use iotcon_core::Representation;
//! use iotcon_wire::{decode, encode};
//!
//! let repr = Representation::new();
//! repr.set_uri("/a/light").unwrap();
//! repr.set_bool("power", true).unwrap();
//!
//! let json = encode(&repr, false).unwrap();
//! assert_eq!(json, r#"{"oc":[{"href":"/a/light","rep":{"power":true}}]}"#);
//!
//! let decoded = decode(&json).unwrap();
//! assert_eq!(decoded, repr);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ipc;
pub mod json;

// Re-export main types
pub use ipc::{
    CruResponse, DeleteResponse, DeviceInfo, HeaderOptions, NotifyMessage, ObserveNotification,
    Query, RemoteResource, Reply, Request, RESULT_OK,
};
pub use json::{decode, decode_with, encode, encode_with, DecodeError, JsonOptions};
