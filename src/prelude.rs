//! Convenient imports for iotcon.
//!
//! ```
//! use iotcon::prelude::*;
//!
//! let repr = Representation::new();
//! repr.set_list("levels", List::from(vec![1i64, 2, 3])).unwrap();
//! ```

// Value model
pub use crate::{List, Representation, Value, ValueKind};

// Error handling
pub use crate::{Error, Result};

// Configuration
pub use crate::CodecConfig;

// Daemon payloads
pub use crate::client::PendingCall;
pub use iotcon_wire::{
    CruResponse, DeleteResponse, DeviceInfo, HeaderOptions, ObserveNotification, Query,
    RemoteResource, Reply, Request,
};
