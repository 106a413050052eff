//! JSON decoding for representations
//!
//! Accepts both document forms:
//!
//! - `{"oc":[parent, child0, ...]}` as produced by [`encode`](super::encode):
//!   the first entry becomes the returned node and every further entry is
//!   appended to it as a child
//! - a single node object `{"href":..., "rep":{...}, "prop":{...}}`
//!
//! Arrays become lists typed by their first element. Objects inside `"rep"`
//! become nested representations. Any error drops the partially built tree.
//!
//! Empty strings a peer sends for `href`, an attribute key or an `rt`/`if`
//! entry are skipped with a warning; the rest of the document is kept.

use super::parser::parse;
use super::tree::{member, Json};
use super::{JsonOptions, KEY_INTERFACES, KEY_OC, KEY_PROPERTY, KEY_REP, KEY_RESOURCE_TYPES, KEY_URI};
use iotcon_core::{Error, List, Representation, Value};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Decode error types
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Invalid JSON syntax
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Invalid number format
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Unexpected end of input
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// Unexpected character
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),

    /// Nesting deeper than the configured limit
    #[error("Nesting exceeds {0} levels")]
    TooDeep(usize),

    /// Well-formed JSON of the wrong shape for a representation
    #[error("{context}: expected {expected}, got {actual}")]
    UnexpectedType {
        /// Where the value was found
        context: String,
        /// Expected JSON type
        expected: &'static str,
        /// Actual JSON type
        actual: &'static str,
    },

    /// IPC transport bytes could not be unpacked
    #[error("Transport: {0}")]
    Transport(String),

    /// The decoded content violates a model invariant
    #[error(transparent)]
    Model(#[from] Error),
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::Model(inner) => inner,
            DecodeError::UnexpectedType {
                expected, actual, ..
            } => Error::type_mismatch(expected, actual),
            other => Error::Parse(other.to_string()),
        }
    }
}

/// Decode JSON text into a representation
pub fn decode(json: &str) -> Result<Representation, DecodeError> {
    decode_with(json, &JsonOptions::default())
}

/// Decode JSON text using explicit codec options
pub fn decode_with(json: &str, options: &JsonOptions) -> Result<Representation, DecodeError> {
    let result = parse(json, options.max_depth).and_then(|root| decode_document(&root));
    match &result {
        Ok(repr) => {
            let uri = repr.uri();
            debug!(
                uri = uri.as_deref().unwrap_or(""),
                children = repr.child_count(),
                "representation decoded"
            );
        }
        Err(e) => error!(error = %e, "representation decode failed"),
    }
    result
}

fn decode_document(root: &Json) -> Result<Representation, DecodeError> {
    let members = expect_object("document", root)?;
    match member(members, KEY_OC) {
        Some(Json::Array(nodes)) => decode_siblings(nodes),
        Some(other) => Err(unexpected(KEY_OC, "array", other)),
        None => decode_node(members),
    }
}

fn decode_siblings(nodes: &[Json]) -> Result<Representation, DecodeError> {
    let mut iter = nodes.iter();
    let parent = match iter.next() {
        Some(node) => decode_node(expect_object(KEY_OC, node)?)?,
        None => Representation::new(),
    };
    for node in iter {
        let child = decode_node(expect_object(KEY_OC, node)?)?;
        parent.append_child(&child)?;
    }
    Ok(parent)
}

fn decode_node(members: &[(String, Json)]) -> Result<Representation, DecodeError> {
    let repr = Representation::new();

    if let Some(rep) = member(members, KEY_REP) {
        for (key, value) in expect_object(KEY_REP, rep)? {
            let value = decode_value(value)?;
            if key.is_empty() {
                warn!("skipping attribute with empty key");
                continue;
            }
            repr.set(key.as_str(), value)?;
        }
    }

    if let Some(href) = member(members, KEY_URI) {
        match href {
            Json::String(uri) if uri.is_empty() => warn!("skipping empty href"),
            Json::String(uri) => repr.set_uri(uri.as_str())?,
            other => return Err(unexpected(KEY_URI, "string", other)),
        }
    }

    if let Some(prop) = member(members, KEY_PROPERTY) {
        let prop = expect_object(KEY_PROPERTY, prop)?;
        for resource_type in string_members(prop, KEY_RESOURCE_TYPES)? {
            repr.append_resource_type(resource_type)?;
        }
        for interface in string_members(prop, KEY_INTERFACES)? {
            repr.append_interface(interface)?;
        }
    }

    Ok(repr)
}

/// Non-empty strings of the array under `key`; an absent member is empty
fn string_members<'a>(
    members: &'a [(String, Json)],
    key: &str,
) -> Result<Vec<&'a str>, DecodeError> {
    let items = match member(members, key) {
        None => return Ok(Vec::new()),
        Some(Json::Array(items)) => items,
        Some(other) => return Err(unexpected(key, "array", other)),
    };
    let mut strings = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Json::String(s) if s.is_empty() => warn!(key, "skipping empty entry"),
            Json::String(s) => strings.push(s.as_str()),
            other => return Err(unexpected(key, "string", other)),
        }
    }
    Ok(strings)
}

fn decode_value(json: &Json) -> Result<Value, DecodeError> {
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Int(i) => Value::Int(*i),
        Json::Double(d) => Value::Double(*d),
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => {
            let values = items
                .iter()
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()?;
            Value::List(List::from_values(values)?)
        }
        Json::Object(members) => Value::Representation(decode_node(members)?),
    })
}

fn expect_object<'a>(context: &str, json: &'a Json) -> Result<&'a [(String, Json)], DecodeError> {
    match json {
        Json::Object(members) => Ok(members),
        other => Err(unexpected(context, "object", other)),
    }
}

fn unexpected(context: &str, expected: &'static str, actual: &Json) -> DecodeError {
    DecodeError::UnexpectedType {
        context: context.to_string(),
        expected,
        actual: actual.kind_name(),
    }
}
