//! JSON encoding for representations
//!
//! A representation becomes `{"oc":[parent, child0, child1, ...]}` where each
//! entry is a node object with optional `"href"`, `"rep"` and `"prop"`
//! members, written in that order. Only direct children are listed.

use super::tree::Json;
use super::{JsonOptions, KEY_INTERFACES, KEY_OC, KEY_PROPERTY, KEY_REP, KEY_RESOURCE_TYPES, KEY_URI};
use iotcon_core::{Error, List, Representation, Result, Value};
use tracing::debug;

/// Encode a representation and its direct children to JSON text
pub fn encode(repr: &Representation, pretty: bool) -> Result<String> {
    encode_with(repr, &JsonOptions::default().pretty(pretty))
}

/// Encode a representation using explicit codec options
pub fn encode_with(repr: &Representation, options: &JsonOptions) -> Result<String> {
    let mut nodes = vec![node_object(repr)?];
    for child in repr.children() {
        nodes.push(node_object(&child)?);
    }
    let document = Json::Object(vec![(KEY_OC.to_string(), Json::Array(nodes))]);

    let text = write(&document, options.pretty);
    debug!(result = %text, "representation encoded");
    Ok(text)
}

/// Build the `{"href","rep","prop"}` object for one node
fn node_object(repr: &Representation) -> Result<Json> {
    let mut members = Vec::new();

    if let Some(uri) = repr.uri() {
        members.push((KEY_URI.to_string(), Json::String(uri)));
    }

    let attributes = repr.attributes();
    if !attributes.is_empty() {
        let mut rep = Vec::with_capacity(attributes.len());
        for (key, value) in &attributes {
            rep.push((key.clone(), value_to_json(key, value)?));
        }
        members.push((KEY_REP.to_string(), Json::Object(rep)));
    }

    let resource_types = repr.resource_types();
    let interfaces = repr.interfaces();
    if !resource_types.is_empty() || !interfaces.is_empty() {
        let mut prop = Vec::new();
        if !resource_types.is_empty() {
            prop.push((KEY_RESOURCE_TYPES.to_string(), string_array(resource_types)));
        }
        if !interfaces.is_empty() {
            prop.push((KEY_INTERFACES.to_string(), string_array(interfaces)));
        }
        members.push((KEY_PROPERTY.to_string(), Json::Object(prop)));
    }

    Ok(Json::Object(members))
}

fn string_array(values: Vec<String>) -> Json {
    Json::Array(values.into_iter().map(Json::String).collect())
}

fn value_to_json(key: &str, value: &Value) -> Result<Json> {
    Ok(match value {
        Value::Int(i) => Json::Int(*i),
        Value::Bool(b) => Json::Bool(*b),
        Value::Double(d) if d.is_finite() => Json::Double(*d),
        Value::Double(d) => {
            return Err(Error::Representation(format!(
                "{} holds {}, which JSON cannot express",
                key, d
            )))
        }
        Value::String(s) => Json::String(s.clone()),
        Value::Null => Json::Null,
        Value::List(list) => list_to_json(key, list)?,
        Value::Representation(nested) => node_object(nested)?,
    })
}

fn list_to_json(key: &str, list: &List) -> Result<Json> {
    let items = list
        .iter()
        .map(|v| value_to_json(key, v))
        .collect::<Result<Vec<_>>>()?;
    Ok(Json::Array(items))
}

// ============================================================================
// Text output
// ============================================================================

/// Serialize a JSON tree, compact or indented by two spaces
pub(crate) fn write(json: &Json, pretty: bool) -> String {
    let mut out = String::new();
    write_value(&mut out, json, pretty, 0);
    out
}

fn write_value(out: &mut String, json: &Json, pretty: bool, indent: usize) {
    match json {
        Json::Null => out.push_str("null"),
        Json::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Json::Int(i) => out.push_str(&i.to_string()),
        Json::Double(d) => out.push_str(&format_double(*d)),
        Json::String(s) => out.push_str(&encode_string(s)),
        Json::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, pretty, indent + 1);
                write_value(out, item, pretty, indent + 1);
            }
            newline(out, pretty, indent);
            out.push(']');
        }
        Json::Object(members) => {
            if members.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push('{');
            for (i, (key, value)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, pretty, indent + 1);
                out.push_str(&encode_string(key));
                out.push(':');
                if pretty {
                    out.push(' ');
                }
                write_value(out, value, pretty, indent + 1);
            }
            newline(out, pretty, indent);
            out.push('}');
        }
    }
}

fn newline(out: &mut String, pretty: bool, indent: usize) {
    if pretty {
        out.push('\n');
        for _ in 0..indent {
            out.push_str("  ");
        }
    }
}

/// Format a finite double, ensuring it has a decimal point
fn format_double(d: f64) -> String {
    let s = d.to_string();
    if s.contains('.') || s.contains('e') || s.contains('E') {
        s
    } else {
        format!("{}.0", s)
    }
}

/// Encode a string with proper JSON escaping
pub fn encode_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
