//! Codec configuration.

use crate::{Error, Representation, Result};
use iotcon_wire::{json, JsonOptions, Reply};

/// Settings applied to every encode and decode made through it.
///
/// # Example
///
/// ```
/// use iotcon::CodecConfig;
///
/// let config = CodecConfig::builder().pretty(true).max_depth(32).build().unwrap();
/// assert!(config.pretty());
/// assert_eq!(config.max_depth(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
    json: JsonOptions,
}

impl CodecConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::new()
    }

    /// Whether JSON output is indented.
    pub fn pretty(&self) -> bool {
        self.json.pretty
    }

    /// Nesting limit for decoding.
    pub fn max_depth(&self) -> usize {
        self.json.max_depth
    }

    /// The codec-level options.
    pub fn json_options(&self) -> &JsonOptions {
        &self.json
    }

    /// Encode a representation and its direct children.
    pub fn encode(&self, repr: &Representation) -> Result<String> {
        json::encode_with(repr, &self.json)
    }

    /// Decode JSON text into a representation.
    pub fn decode(&self, text: &str) -> Result<Representation> {
        json::decode_with(text, &self.json).map_err(Error::from)
    }

    /// Decode a daemon reply.
    pub fn decode_reply<R: Reply>(&self, bytes: &[u8]) -> Result<R> {
        R::decode_with(bytes, &self.json).map_err(Error::from)
    }
}

/// Builder for [`CodecConfig`].
#[derive(Debug, Clone, Default)]
pub struct CodecConfigBuilder {
    json: JsonOptions,
}

impl CodecConfigBuilder {
    /// Create a builder with default settings (compact, depth 64).
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent JSON output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.json = self.json.pretty(pretty);
        self
    }

    /// Limit decode nesting to `depth` arrays/objects.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.json = self.json.max_depth(depth);
        self
    }

    /// Finish the configuration.
    ///
    /// A depth below 2 cannot hold any document and is rejected.
    pub fn build(self) -> Result<CodecConfig> {
        if self.json.max_depth < 2 {
            return Err(Error::InvalidParameter(format!(
                "max_depth {} cannot hold a document",
                self.json.max_depth
            )));
        }
        Ok(CodecConfig { json: self.json })
    }
}
