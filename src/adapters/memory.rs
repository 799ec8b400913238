use crate::domain::ports::LookupSource;
use crate::utils::error::{LookupError, Result};
use std::collections::HashMap;

/// In-memory key/value table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: i64) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: i64) -> Option<i64> {
        self.values.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, i64>> for MemoryStore {
    fn from(values: HashMap<String, i64>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl LookupSource for MemoryStore {
    fn get(&self, key: &str) -> Result<i64> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| LookupError::NotFound {
                key: key.to_string(),
            })
    }
}
