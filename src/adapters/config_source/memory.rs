//! In-memory configuration source.

use std::collections::HashMap;

use crate::domain::ports::ConfigSource;

/// A fixed map of configuration values.
///
/// Used by tests and by hosts that resolve secrets themselves and only want
/// to hand the result to an action.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigSource {
    values: HashMap<String, String>,
}

impl InMemoryConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryConfigSource {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
