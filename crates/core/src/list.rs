//! Homogeneous lists
//!
//! A [`List`] holds values of exactly one [`ValueKind`]. Lists of lists form
//! multi-dimensional arrays up to [`MAX_LIST_DIMENSION`] levels deep; every
//! inner list of one outer list shares the same element kind and dimension.

use crate::error::{Error, Result};
use crate::representation::Representation;
use crate::value::{Value, ValueKind};

/// Deepest supported nesting of lists
pub const MAX_LIST_DIMENSION: usize = 3;

/// Ordered, kind-homogeneous sequence of values
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    kind: ValueKind,
    items: Vec<Value>,
}

impl List {
    /// Create an empty list of the given element kind
    pub fn new(kind: ValueKind) -> Self {
        List {
            kind,
            items: Vec::new(),
        }
    }

    /// Create a list of a declared kind, checking every element.
    pub fn with_kind(kind: ValueKind, values: Vec<Value>) -> Result<Self> {
        let mut list = List::new(kind);
        list.items.reserve(values.len());
        for value in values {
            list.push(value)?;
        }
        Ok(list)
    }

    /// Create a list whose kind is taken from the first element.
    ///
    /// An empty input yields an empty list of kind [`ValueKind::Null`].
    /// Mixed kinds fail with [`Error::TypeMismatch`].
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let kind = values.first().map(Value::kind).unwrap_or(ValueKind::Null);
        List::with_kind(kind, values)
    }

    /// Element kind
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Number of nesting levels: 1 for a flat list, 2 for a list of lists, ...
    pub fn dimension(&self) -> usize {
        if self.kind != ValueKind::List {
            return 1;
        }
        1 + self
            .items
            .iter()
            .filter_map(Value::as_list)
            .map(List::dimension)
            .max()
            .unwrap_or(1)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a value at the end
    pub fn push(&mut self, value: Value) -> Result<()> {
        self.check(&value)?;
        self.items.push(value);
        Ok(())
    }

    /// Insert a value at `pos`, shifting later elements.
    ///
    /// `pos == len()` appends; anything beyond fails with [`Error::NotFound`].
    pub fn insert(&mut self, pos: usize, value: Value) -> Result<()> {
        if pos > self.items.len() {
            return Err(Error::NotFound(format!(
                "position {} of list with {} elements",
                pos,
                self.items.len()
            )));
        }
        self.check(&value)?;
        self.items.insert(pos, value);
        Ok(())
    }

    /// Remove and return the value at `pos`
    pub fn remove(&mut self, pos: usize) -> Result<Value> {
        if pos >= self.items.len() {
            return Err(Error::NotFound(format!(
                "position {} of list with {} elements",
                pos,
                self.items.len()
            )));
        }
        Ok(self.items.remove(pos))
    }

    /// Value at `pos`
    pub fn get(&self, pos: usize) -> Result<&Value> {
        self.items.get(pos).ok_or_else(|| {
            Error::NotFound(format!(
                "position {} of list with {} elements",
                pos,
                self.items.len()
            ))
        })
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Visit each element with its position
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(usize, &Value),
    {
        for (pos, value) in self.items.iter().enumerate() {
            f(pos, value);
        }
    }

    /// Copy the list, recursively copying nested lists and representations
    pub fn deep_clone(&self) -> List {
        List {
            kind: self.kind,
            items: self.items.iter().map(Value::deep_clone).collect(),
        }
    }

    /// Consume the list, returning its elements
    pub fn into_values(self) -> Vec<Value> {
        self.items
    }

    fn check(&self, value: &Value) -> Result<()> {
        if value.kind() != self.kind {
            return Err(Error::type_mismatch(self.kind, value.kind()));
        }

        let Value::List(inner) = value else {
            return Ok(());
        };

        if inner.dimension() + 1 > MAX_LIST_DIMENSION {
            return Err(Error::InvalidParameter(format!(
                "list dimension exceeds {}",
                MAX_LIST_DIMENSION
            )));
        }

        if inner.is_empty() {
            return Ok(());
        }

        // Inner lists must agree on element kind and shape
        let sibling = self
            .items
            .iter()
            .filter_map(Value::as_list)
            .find(|l| !l.is_empty());
        if let Some(sibling) = sibling {
            if sibling.kind != inner.kind {
                return Err(Error::type_mismatch(
                    format!("List<{}>", sibling.kind),
                    format!("List<{}>", inner.kind),
                ));
            }
            if sibling.dimension() != inner.dimension() {
                return Err(Error::type_mismatch(
                    format!("{}-dimensional list", sibling.dimension()),
                    format!("{}-dimensional list", inner.dimension()),
                ));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<Vec<i64>> for List {
    fn from(values: Vec<i64>) -> Self {
        List {
            kind: ValueKind::Int,
            items: values.into_iter().map(Value::Int).collect(),
        }
    }
}

impl From<Vec<bool>> for List {
    fn from(values: Vec<bool>) -> Self {
        List {
            kind: ValueKind::Bool,
            items: values.into_iter().map(Value::Bool).collect(),
        }
    }
}

impl From<Vec<f64>> for List {
    fn from(values: Vec<f64>) -> Self {
        List {
            kind: ValueKind::Double,
            items: values.into_iter().map(Value::Double).collect(),
        }
    }
}

impl From<Vec<String>> for List {
    fn from(values: Vec<String>) -> Self {
        List {
            kind: ValueKind::String,
            items: values.into_iter().map(Value::String).collect(),
        }
    }
}

impl From<Vec<Representation>> for List {
    fn from(values: Vec<Representation>) -> Self {
        List {
            kind: ValueKind::Representation,
            items: values.into_iter().map(Value::Representation).collect(),
        }
    }
}
