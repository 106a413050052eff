//! Daemon replies and notifications
//!
//! Header options are kept on decode only when the call succeeded and the
//! daemon actually sent some. A reply whose embedded representation fails
//! to decode fails as a whole.

use super::{embed, from_bytes, to_bytes, unembed, HeaderOptions};
use crate::json::{DecodeError, JsonOptions};
use iotcon_core::{Representation, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result code of a successful call
pub const RESULT_OK: i32 = 0;

/// A reply decoded from daemon bytes
pub trait Reply: Sized {
    /// Decode with explicit JSON options for embedded representations
    fn decode_with(bytes: &[u8], options: &JsonOptions) -> std::result::Result<Self, DecodeError>;

    /// Decode with default JSON options
    fn decode(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        Self::decode_with(bytes, &JsonOptions::default())
    }

    /// Daemon result code
    fn result(&self) -> i32;
}

fn received_options(options: HeaderOptions, result: i32) -> Option<HeaderOptions> {
    if result == RESULT_OK && !options.is_empty() {
        Some(options)
    } else {
        None
    }
}

// ============================================================================
// Get / Put / Post
// ============================================================================

#[derive(Serialize, Deserialize)]
struct CruWire(HeaderOptions, String, i32);

/// Reply to a get, put or post call
#[derive(Debug, Clone, PartialEq)]
pub struct CruResponse {
    /// Header options returned by the peer
    pub options: Option<HeaderOptions>,
    /// Resource state returned by the peer
    pub representation: Representation,
    /// Daemon result code
    pub result: i32,
}

impl CruResponse {
    /// Pack the reply
    pub fn encode(&self) -> Result<Vec<u8>> {
        to_bytes(&CruWire(
            self.options.clone().unwrap_or_default(),
            embed(&self.representation)?,
            self.result,
        ))
    }
}

impl Reply for CruResponse {
    fn decode_with(bytes: &[u8], options: &JsonOptions) -> std::result::Result<Self, DecodeError> {
        let CruWire(header, json, result) = from_bytes(bytes)?;
        let representation = unembed(&json, options)?;
        debug!(result, "cru reply decoded");
        Ok(CruResponse {
            options: received_options(header, result),
            representation,
            result,
        })
    }

    fn result(&self) -> i32 {
        self.result
    }
}

// ============================================================================
// Delete
// ============================================================================

#[derive(Serialize, Deserialize)]
struct DeleteWire(HeaderOptions, i32);

/// Reply to a delete call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    /// Header options returned by the peer
    pub options: Option<HeaderOptions>,
    /// Daemon result code
    pub result: i32,
}

impl DeleteResponse {
    /// Pack the reply
    pub fn encode(&self) -> Result<Vec<u8>> {
        to_bytes(&DeleteWire(self.options.clone().unwrap_or_default(), self.result))
    }
}

impl Reply for DeleteResponse {
    fn decode_with(bytes: &[u8], _options: &JsonOptions) -> std::result::Result<Self, DecodeError> {
        let DeleteWire(header, result) = from_bytes(bytes)?;
        debug!(result, "delete reply decoded");
        Ok(DeleteResponse {
            options: received_options(header, result),
            result,
        })
    }

    fn result(&self) -> i32 {
        self.result
    }
}

// ============================================================================
// Observe
// ============================================================================

#[derive(Serialize, Deserialize)]
struct ObserveWire(HeaderOptions, String, i32, i32);

/// One notification of an observed resource
#[derive(Debug, Clone, PartialEq)]
pub struct ObserveNotification {
    /// Header options returned by the peer
    pub options: Option<HeaderOptions>,
    /// Current resource state
    pub representation: Representation,
    /// Daemon result code
    pub result: i32,
    /// Observe sequence number
    pub sequence: i32,
}

impl ObserveNotification {
    /// Pack the notification
    pub fn encode(&self) -> Result<Vec<u8>> {
        to_bytes(&ObserveWire(
            self.options.clone().unwrap_or_default(),
            embed(&self.representation)?,
            self.result,
            self.sequence,
        ))
    }
}

impl Reply for ObserveNotification {
    fn decode_with(bytes: &[u8], options: &JsonOptions) -> std::result::Result<Self, DecodeError> {
        let ObserveWire(header, json, result, sequence) = from_bytes(bytes)?;
        let representation = unembed(&json, options)?;
        debug!(result, sequence, "observe notification decoded");
        Ok(ObserveNotification {
            options: received_options(header, result),
            representation,
            result,
            sequence,
        })
    }

    fn result(&self) -> i32 {
        self.result
    }
}

// ============================================================================
// Server-side notify
// ============================================================================

/// Message a server sends to its observers
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyMessage {
    /// Error code reported to observers
    pub error_code: i32,
    /// Interface the state is reported through
    pub iface: i32,
    /// Resource state
    pub representation: Representation,
}

impl NotifyMessage {
    /// Pack an optional message as an array of zero or one entries
    pub fn encode(message: Option<&NotifyMessage>) -> Result<Vec<u8>> {
        let mut entries: Vec<(i32, i32, String)> = Vec::with_capacity(1);
        if let Some(msg) = message {
            entries.push((msg.error_code, msg.iface, embed(&msg.representation)?));
        }
        to_bytes(&entries)
    }

    /// Unpack a message array
    pub fn decode(bytes: &[u8]) -> std::result::Result<Option<NotifyMessage>, DecodeError> {
        let mut entries: Vec<(i32, i32, String)> = from_bytes(bytes)?;
        if entries.len() > 1 {
            return Err(DecodeError::Transport(format!(
                "expected at most one notify message, got {}",
                entries.len()
            )));
        }
        match entries.pop() {
            Some((error_code, iface, json)) => Ok(Some(NotifyMessage {
                error_code,
                iface,
                representation: unembed(&json, &JsonOptions::default())?,
            })),
            None => Ok(None),
        }
    }
}
