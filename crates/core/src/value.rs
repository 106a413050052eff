//! Value types for resource representations
//!
//! This module defines the [`Value`] stored under an attribute key of a
//! [`Representation`]. The enum is closed: exactly seven kinds exist and each
//! variant owns its payload.
//!
//! ## Equality Rules
//!
//! - Different kinds are NEVER equal (no coercion)
//! - `Int(1)` != `Double(1.0)`
//! - Double uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - Representations compare structurally

use crate::list::List;
use crate::representation::Representation;
use std::fmt;

/// The kind of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit IEEE-754 floating point
    Double,
    /// UTF-8 string
    String,
    /// Null
    Null,
    /// Homogeneous list
    List,
    /// Nested representation
    Representation,
}

impl ValueKind {
    /// Returns the kind name (for error messages)
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Int => "Int",
            ValueKind::Bool => "Bool",
            ValueKind::Double => "Double",
            ValueKind::String => "String",
            ValueKind::Null => "Null",
            ValueKind::List => "List",
            ValueKind::Representation => "Representation",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single typed datum stored under an attribute key.
///
/// `Clone` copies scalars, strings and list elements, but a nested
/// [`Representation`] is a shared handle and cloning it retains the same
/// node. Use [`Value::deep_clone`] for a copy that shares nothing.
#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// Boolean true or false
    Bool(bool),

    /// 64-bit IEEE-754 floating point
    Double(f64),

    /// UTF-8 encoded string
    String(String),

    /// Null
    Null,

    /// Ordered, kind-homogeneous sequence of values
    List(List),

    /// Nested representation (retained handle)
    Representation(Representation),
}

impl Value {
    /// Returns the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
            Value::Null => ValueKind::Null,
            Value::List(_) => ValueKind::List,
            Value::Representation(_) => ValueKind::Representation,
        }
    }

    /// Returns the kind name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as list reference
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Try to get as representation handle
    pub fn as_representation(&self) -> Option<&Representation> {
        match self {
            Value::Representation(r) => Some(r),
            _ => None,
        }
    }

    /// Copy this value, recursively copying nested lists and representations.
    pub fn deep_clone(&self) -> Value {
        match self {
            Value::List(l) => Value::List(l.deep_clone()),
            Value::Representation(r) => Value::Representation(r.deep_clone()),
            other => other.clone(),
        }
    }

    /// Whether `target` is reachable from this value.
    pub(crate) fn reaches(&self, target: &Representation) -> bool {
        match self {
            Value::Representation(r) => r.reaches(target),
            Value::List(l) => l.iter().any(|v| v.reaches(target)),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Representation(a), Value::Representation(b)) => a == b,

            // Different kinds: never equal
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Value::List(l)
    }
}

impl From<Representation> for Value {
    fn from(r: Representation) -> Self {
        Value::Representation(r)
    }
}
