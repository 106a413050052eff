//! Request query parameters

use iotcon_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Ordered `key=value` query with unique keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct Query {
    entries: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing an existing value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::InvalidParameter("query key must not be empty".into()));
        }
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        Ok(())
    }

    /// Value for `key`
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove `key`
    pub fn remove(&mut self, key: &str) -> Result<()> {
        match self.entries.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                self.entries.remove(pos);
                Ok(())
            }
            None => {
                warn!(key, "query key not found");
                Err(Error::NotFound(format!("query key {}", key)))
            }
        }
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the query is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Visit each pair in insertion order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &str),
    {
        for (key, value) in self.iter() {
            f(key, value);
        }
    }
}

impl TryFrom<Vec<(String, String)>> for Query {
    type Error = Error;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self> {
        let mut query = Query::new();
        for (key, value) in pairs {
            if query.lookup(&key).is_some() {
                return Err(Error::InvalidParameter(format!("duplicate query key {}", key)));
            }
            query.insert(key, value)?;
        }
        Ok(query)
    }
}

impl From<Query> for Vec<(String, String)> {
    fn from(query: Query) -> Self {
        query.entries
    }
}
