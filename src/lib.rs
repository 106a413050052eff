//! # iotcon
//!
//! Typed resource representations for IoT clients and servers, with the two
//! codecs that move them around: JSON documents for the network and
//! fixed-shape payloads for calls to the local daemon.
//!
//! ## Quick Start
//!
//! ```
//! use iotcon::prelude::*;
//!
//! let light = Representation::new();
//! light.set_uri("/a/light")?;
//! light.set_bool("power", true)?;
//! light.set_int("level", 5)?;
//! light.append_resource_type("core.light")?;
//! light.append_interface("oc.mi.def")?;
//!
//! let config = CodecConfig::builder().build()?;
//! let json = config.encode(&light)?;
//! assert_eq!(
//!     json,
//!     r#"{"oc":[{"href":"/a/light","rep":{"power":true,"level":5},"prop":{"rt":["core.light"],"if":["oc.mi.def"]}}]}"#
//! );
//! assert_eq!(config.decode(&json)?, light);
//! # Ok::<(), iotcon::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`Representation`], [`Value`], [`List`] - the value model (`iotcon-core`)
//! - [`json`] and [`ipc`] - the codecs (`iotcon-wire`)
//! - [`CodecConfig`] - shared codec settings
//! - [`client::PendingCall`] - completion of an asynchronous daemon call

#![warn(missing_docs)]

pub mod client;
mod config;

pub mod prelude;

// Re-export the value model
pub use iotcon_core::{Error, List, Representation, Result, Value, ValueKind, MAX_LIST_DIMENSION};

// Re-export the codecs
pub use iotcon_wire::{ipc, json};

pub use config::{CodecConfig, CodecConfigBuilder};
