//! JSON wire encoding for representations
//!
//! Documents use the resource layout understood by iotcon peers:
//!
//! - `"oc"`: array of node objects, parent first, then direct children
//! - `"href"`: the node URI
//! - `"rep"`: attribute object; arrays are lists, objects are nested nodes
//! - `"prop"`: `{"rt": [...], "if": [...]}` resource types and interfaces

mod decode;
mod encode;
mod parser;
mod tree;

pub use decode::{decode, decode_with, DecodeError};
pub use encode::{encode, encode_string, encode_with};

/// Top-level array of sibling nodes
pub const KEY_OC: &str = "oc";
/// Node URI member
pub const KEY_URI: &str = "href";
/// Attribute object member
pub const KEY_REP: &str = "rep";
/// Property object member
pub const KEY_PROPERTY: &str = "prop";
/// Resource type array inside `"prop"`
pub const KEY_RESOURCE_TYPES: &str = "rt";
/// Interface array inside `"prop"`
pub const KEY_INTERFACES: &str = "if";

/// Default nesting limit applied while parsing
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options shared by the encoder and decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    /// Indent output by two spaces per level
    pub pretty: bool,
    /// Maximum array/object nesting accepted by the decoder
    pub max_depth: usize,
}

impl JsonOptions {
    /// Set pretty output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the decoder nesting limit
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
