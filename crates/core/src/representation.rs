//! Resource representations
//!
//! A [`Representation`] is a shared handle to one node of a resource tree:
//! an optional URI, ordered resource types and interfaces, an
//! insertion-ordered attribute map and ordered children.
//!
//! ## Ownership
//!
//! The handle is reference counted. [`Representation::new`] starts the count
//! at 1, [`Representation::retain`] (or `Clone`) adds a reference and
//! [`Representation::release`] (or dropping the handle) removes one. When the
//! last reference goes away the node is destroyed, which releases every child
//! it holds; a child retained elsewhere survives its former parent.
//!
//! Appending a child or storing a representation as an attribute value
//! retains it, so mutations through any handle are visible to every holder.
//! [`Representation::deep_clone`] produces a tree that shares no node with
//! its source.
//!
//! ## Concurrency
//!
//! The count is atomic and node state sits behind a read/write lock, so
//! handles may cross threads. Each method holds the lock only for its own
//! duration; read-modify-write sequences spanning several calls need
//! external serialization.
//!
//! Operations that link one node under another (`append_child` and `set`)
//! are serialized process-wide so the acyclic check and the link happen as
//! one step. Node locks are only taken after the link lock.

use crate::error::{Error, Result};
use crate::list::List;
use crate::value::{Value, ValueKind};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use tracing::{trace, warn};

/// Held across the cycle check and the link it guards
static LINKS: Mutex<()> = parking_lot::const_mutex(());

#[derive(Default)]
struct Node {
    uri: Option<String>,
    resource_types: Vec<String>,
    interfaces: Vec<String>,
    attributes: Vec<(String, Value)>,
    children: Vec<Representation>,
}

impl Node {
    fn position(&self, key: &str) -> Option<usize> {
        self.attributes.iter().position(|(k, _)| k == key)
    }
}

/// Reference-counted handle to a resource representation node
#[derive(Clone)]
pub struct Representation {
    node: Arc<RwLock<Node>>,
}

impl Representation {
    /// Create an empty representation with a reference count of 1
    pub fn new() -> Self {
        Representation {
            node: Arc::new(RwLock::new(Node::default())),
        }
    }

    // ========================================================================
    // Reference counting
    // ========================================================================

    /// Add a reference, returning a handle to the same node
    pub fn retain(&self) -> Representation {
        self.clone()
    }

    /// Drop this reference.
    ///
    /// Returns `true` when it was the last one and the node was destroyed.
    pub fn release(self) -> bool {
        match Arc::into_inner(self.node) {
            Some(node) => {
                let node = node.into_inner();
                trace!(
                    uri = node.uri.as_deref().unwrap_or(""),
                    children = node.children.len(),
                    "representation destroyed"
                );
                drop(node);
                true
            }
            None => false,
        }
    }

    /// Current number of live references to this node
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.node)
    }

    /// Whether both handles refer to the same node
    pub fn ptr_eq(&self, other: &Representation) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    // ========================================================================
    // URI
    // ========================================================================

    /// The URI, if set
    pub fn uri(&self) -> Option<String> {
        self.node.read().uri.clone()
    }

    /// Set the URI, replacing any previous one
    pub fn set_uri(&self, uri: impl Into<String>) -> Result<()> {
        let uri = uri.into();
        if uri.is_empty() {
            return Err(Error::InvalidParameter("uri must not be empty".into()));
        }
        self.node.write().uri = Some(uri);
        Ok(())
    }

    /// Clear the URI
    pub fn delete_uri(&self) {
        self.node.write().uri = None;
    }

    // ========================================================================
    // Resource types and interfaces
    // ========================================================================

    /// Append a resource type. Duplicates are kept in order.
    pub fn append_resource_type(&self, resource_type: impl Into<String>) -> Result<()> {
        let resource_type = resource_type.into();
        if resource_type.is_empty() {
            return Err(Error::InvalidParameter("resource type must not be empty".into()));
        }
        self.node.write().resource_types.push(resource_type);
        Ok(())
    }

    /// Remove the first occurrence of a resource type
    pub fn delete_resource_type(&self, resource_type: &str) -> Result<()> {
        let mut node = self.node.write();
        match node.resource_types.iter().position(|t| t == resource_type) {
            Some(pos) => {
                node.resource_types.remove(pos);
                Ok(())
            }
            None => {
                warn!(resource_type, "resource type not found");
                Err(Error::NotFound(format!("resource type {}", resource_type)))
            }
        }
    }

    /// Resource types in insertion order
    pub fn resource_types(&self) -> Vec<String> {
        self.node.read().resource_types.clone()
    }

    /// Number of resource types
    pub fn resource_type_count(&self) -> usize {
        self.node.read().resource_types.len()
    }

    /// Visit each resource type in insertion order
    pub fn for_each_resource_type<F>(&self, mut f: F)
    where
        F: FnMut(&str),
    {
        for resource_type in self.resource_types() {
            f(&resource_type);
        }
    }

    /// Append an interface. Duplicates are kept in order.
    pub fn append_interface(&self, interface: impl Into<String>) -> Result<()> {
        let interface = interface.into();
        if interface.is_empty() {
            return Err(Error::InvalidParameter("interface must not be empty".into()));
        }
        self.node.write().interfaces.push(interface);
        Ok(())
    }

    /// Remove the first occurrence of an interface
    pub fn delete_interface(&self, interface: &str) -> Result<()> {
        let mut node = self.node.write();
        match node.interfaces.iter().position(|i| i == interface) {
            Some(pos) => {
                node.interfaces.remove(pos);
                Ok(())
            }
            None => {
                warn!(interface, "interface not found");
                Err(Error::NotFound(format!("interface {}", interface)))
            }
        }
    }

    /// Interfaces in insertion order
    pub fn interfaces(&self) -> Vec<String> {
        self.node.read().interfaces.clone()
    }

    /// Number of interfaces
    pub fn interface_count(&self) -> usize {
        self.node.read().interfaces.len()
    }

    /// Visit each interface in insertion order
    pub fn for_each_interface<F>(&self, mut f: F)
    where
        F: FnMut(&str),
    {
        for interface in self.interfaces() {
            f(&interface);
        }
    }

    // ========================================================================
    // Children
    // ========================================================================

    /// Append `child`, retaining it.
    ///
    /// Appending a node to itself or to one of its own descendants fails
    /// with [`Error::InvalidParameter`].
    pub fn append_child(&self, child: &Representation) -> Result<()> {
        let _links = LINKS.lock();
        if child.reaches(self) {
            return Err(Error::InvalidParameter(
                "child would make the representation tree cyclic".into(),
            ));
        }
        self.node.write().children.push(child.retain());
        Ok(())
    }

    /// Child at `index`
    pub fn child(&self, index: usize) -> Result<Representation> {
        let node = self.node.read();
        node.children.get(index).cloned().ok_or_else(|| {
            Error::NotFound(format!("child {} of {}", index, node.children.len()))
        })
    }

    /// Number of children
    pub fn child_count(&self) -> usize {
        self.node.read().children.len()
    }

    /// Handles to every child, in order
    pub fn children(&self) -> Vec<Representation> {
        self.node.read().children.clone()
    }

    /// Visit each child in order.
    ///
    /// The closure borrows each child; retain it to keep it past the call.
    pub fn for_each_child<F>(&self, mut f: F)
    where
        F: FnMut(&Representation),
    {
        for child in self.children() {
            f(&child);
        }
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Store `value` under `key`, replacing any previous value in place
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        if key.is_empty() {
            return Err(Error::InvalidParameter("attribute key must not be empty".into()));
        }

        let _links = LINKS.lock();
        if value.reaches(self) {
            return Err(Error::InvalidParameter(format!(
                "value for {} would make the representation tree cyclic",
                key
            )));
        }

        let mut node = self.node.write();
        match node.position(&key) {
            Some(pos) => node.attributes[pos].1 = value,
            None => node.attributes.push((key, value)),
        }
        Ok(())
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Result<Value> {
        self.with_value(key, Value::clone)
    }

    /// Borrow the value under `key` for the duration of `f`.
    ///
    /// `f` must not mutate this representation.
    pub fn with_value<R, F>(&self, key: &str, f: F) -> Result<R>
    where
        F: FnOnce(&Value) -> R,
    {
        let node = self.node.read();
        match node.position(key) {
            Some(pos) => Ok(f(&node.attributes[pos].1)),
            None => Err(Error::NotFound(format!("key {}", key))),
        }
    }

    /// Remove and return the value under `key`
    pub fn remove(&self, key: &str) -> Result<Value> {
        let mut node = self.node.write();
        match node.position(key) {
            Some(pos) => Ok(node.attributes.remove(pos).1),
            None => {
                warn!(key, "attribute not found");
                Err(Error::NotFound(format!("key {}", key)))
            }
        }
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.node.read().position(key).is_some()
    }

    /// Attribute keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.node.read().attributes.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Number of attributes
    pub fn key_count(&self) -> usize {
        self.node.read().attributes.len()
    }

    /// Snapshot of every attribute in insertion order
    pub fn attributes(&self) -> Vec<(String, Value)> {
        self.node.read().attributes.clone()
    }

    /// Visit each attribute in insertion order
    pub fn for_each_attribute<F>(&self, mut f: F)
    where
        F: FnMut(&str, &Value),
    {
        for (key, value) in self.attributes() {
            f(&key, &value);
        }
    }

    /// Store an integer
    pub fn set_int(&self, key: impl Into<String>, value: i64) -> Result<()> {
        self.set(key, Value::Int(value))
    }

    /// Store a boolean
    pub fn set_bool(&self, key: impl Into<String>, value: bool) -> Result<()> {
        self.set(key, Value::Bool(value))
    }

    /// Store a double
    pub fn set_double(&self, key: impl Into<String>, value: f64) -> Result<()> {
        self.set(key, Value::Double(value))
    }

    /// Store a string
    pub fn set_str(&self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.set(key, Value::String(value.into()))
    }

    /// Store null
    pub fn set_null(&self, key: impl Into<String>) -> Result<()> {
        self.set(key, Value::Null)
    }

    /// Store a list
    pub fn set_list(&self, key: impl Into<String>, value: List) -> Result<()> {
        self.set(key, Value::List(value))
    }

    /// Store a nested representation, retaining it
    pub fn set_representation(&self, key: impl Into<String>, value: &Representation) -> Result<()> {
        self.set(key, Value::Representation(value.retain()))
    }

    /// Integer under `key`
    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.typed(key, ValueKind::Int, Value::as_int)
    }

    /// Boolean under `key`
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.typed(key, ValueKind::Bool, Value::as_bool)
    }

    /// Double under `key`
    pub fn get_double(&self, key: &str) -> Result<f64> {
        self.typed(key, ValueKind::Double, Value::as_double)
    }

    /// String under `key`
    pub fn get_str(&self, key: &str) -> Result<String> {
        self.typed(key, ValueKind::String, |v| v.as_str().map(str::to_string))
    }

    /// List under `key`
    pub fn get_list(&self, key: &str) -> Result<List> {
        self.typed(key, ValueKind::List, |v| v.as_list().cloned())
    }

    /// Nested representation under `key` (shared handle)
    pub fn get_representation(&self, key: &str) -> Result<Representation> {
        self.typed(key, ValueKind::Representation, |v| v.as_representation().cloned())
    }

    /// Whether the value under `key` is null
    pub fn is_null(&self, key: &str) -> Result<bool> {
        self.with_value(key, Value::is_null)
    }

    fn typed<T, F>(&self, key: &str, kind: ValueKind, extract: F) -> Result<T>
    where
        F: FnOnce(&Value) -> Option<T>,
    {
        self.with_value(key, |v| extract(v).ok_or_else(|| Error::type_mismatch(kind, v.kind())))?
    }

    // ========================================================================
    // Cloning
    // ========================================================================

    /// Copy the whole tree. The result shares no node with `self`.
    pub fn deep_clone(&self) -> Representation {
        let node = self.node.read();
        let copy = Node {
            uri: node.uri.clone(),
            resource_types: node.resource_types.clone(),
            interfaces: node.interfaces.clone(),
            attributes: node
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), v.deep_clone()))
                .collect(),
            children: node.children.iter().map(Representation::deep_clone).collect(),
        };
        Representation {
            node: Arc::new(RwLock::new(copy)),
        }
    }

    /// Whether `target` is this node or reachable from it
    pub(crate) fn reaches(&self, target: &Representation) -> bool {
        if self.ptr_eq(target) {
            return true;
        }
        let node = self.node.read();
        node.children.iter().any(|c| c.reaches(target))
            || node.attributes.iter().any(|(_, v)| v.reaches(target))
    }
}

impl Default for Representation {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Representation {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let a = self.node.read();
        let b = other.node.read();
        a.uri == b.uri
            && a.resource_types == b.resource_types
            && a.interfaces == b.interfaces
            && a.attributes == b.attributes
            && a.children == b.children
    }
}

impl fmt::Debug for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.read();
        f.debug_struct("Representation")
            .field("uri", &node.uri)
            .field("resource_types", &node.resource_types)
            .field("interfaces", &node.interfaces)
            .field("attributes", &node.attributes)
            .field("children", &node.children)
            .finish()
    }
}
