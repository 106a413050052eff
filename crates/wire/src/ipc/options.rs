//! Header options attached to requests and replies

use iotcon_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Ordered `(id, value)` header options.
///
/// Several entries may share an id; all of them are transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(u16, String)>", into = "Vec<(u16, String)>")]
pub struct HeaderOptions {
    entries: Vec<(u16, String)>,
}

impl HeaderOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option
    pub fn insert(&mut self, id: u16, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::InvalidParameter(format!(
                "option {} has an empty value",
                id
            )));
        }
        self.entries.push((id, value));
        Ok(())
    }

    /// First value stored for `id`
    pub fn lookup(&self, id: u16) -> Option<&str> {
        self.entries
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, v)| v.as_str())
    }

    /// Remove every entry with `id`
    pub fn remove(&mut self, id: u16) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        if self.entries.len() == before {
            warn!(id, "header option not found");
            return Err(Error::NotFound(format!("option {}", id)));
        }
        Ok(())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.entries.iter().map(|(id, v)| (*id, v.as_str()))
    }

    /// Visit each entry in insertion order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(u16, &str),
    {
        for (id, value) in self.iter() {
            f(id, value);
        }
    }
}

impl TryFrom<Vec<(u16, String)>> for HeaderOptions {
    type Error = Error;

    fn try_from(entries: Vec<(u16, String)>) -> Result<Self> {
        let mut options = HeaderOptions::new();
        for (id, value) in entries {
            options.insert(id, value)?;
        }
        Ok(options)
    }
}

impl From<HeaderOptions> for Vec<(u16, String)> {
    fn from(options: HeaderOptions) -> Self {
        options.entries
    }
}
