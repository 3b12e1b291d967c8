use std::collections::HashMap;

use parking_lot::RwLock;

use crate::source::Configuration;

/// In-memory configuration that can be changed at runtime
///
/// Readers always observe a complete value; writers replace values
/// atomically per key.
#[derive(Debug, Default)]
pub struct MapConfiguration {
    values: RwLock<HashMap<String, String>>,
}

impl MapConfiguration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set or replace a value
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().insert(key.into(), value.into());
    }

    /// Remove a value, returning the previous one
    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl Configuration for MapConfiguration {
    fn get(&self, key: &str) -> Option<String> {
        let value = self.values.read().get(key).cloned();
        tracing::trace!(key, found = value.is_some(), "memory configuration lookup");
        value
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapConfiguration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replace_and_remove() {
        let config = MapConfiguration::new().with("a.b", "1");
        assert_eq!(config.get("a.b").as_deref(), Some("1"));

        config.set("a.b", "2");
        assert_eq!(config.get("a.b").as_deref(), Some("2"));

        assert_eq!(config.remove("a.b").as_deref(), Some("2"));
        assert_eq!(config.get("a.b"), None);
        assert!(config.is_empty());
    }

    #[test]
    fn empty_value_is_not_absent() {
        let config = MapConfiguration::new().with("transport.serialization", "");
        assert_eq!(config.get_or("transport.serialization", "SEATA"), "");
        assert_eq!(config.get_or("missing", "SEATA"), "SEATA");
    }

    #[test]
    fn collects_from_pairs() {
        let config: MapConfiguration = [("x", "1"), ("y", "2")].into_iter().collect();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("y").as_deref(), Some("2"));
    }
}
