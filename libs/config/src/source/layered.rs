use std::sync::Arc;

use crate::source::Configuration;

/// Ordered stack of configuration sources
///
/// Sources are consulted in insertion order and the first one holding the key
/// wins.
#[derive(Clone, Default)]
pub struct LayeredConfiguration {
    sources: Vec<Arc<dyn Configuration>>,
}

impl LayeredConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lower-priority source
    pub fn with_source(mut self, source: impl Configuration + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// Append an already shared source
    pub fn with_shared(mut self, source: Arc<dyn Configuration>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl std::fmt::Debug for LayeredConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredConfiguration")
            .field("sources", &self.sources.len())
            .finish()
    }
}

impl Configuration for LayeredConfiguration {
    fn get(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|source| source.get(key))
    }
}
