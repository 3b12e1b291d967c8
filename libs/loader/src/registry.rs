use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{LoaderError, Result};

/// Lookup of a capability implementation by activation name
pub trait ServiceLoader<S: ?Sized>: Send + Sync {
    /// Load the implementation registered under `name`
    fn load(&self, name: &str) -> Result<Arc<S>>;
}

/// Lifetime of the instances handed out for one registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Build once on first load, then share
    #[default]
    Singleton,
    /// Build a fresh instance on every load
    Prototype,
}

type Factory<S> = Arc<dyn Fn() -> Arc<S> + Send + Sync>;

struct Provider<S: ?Sized> {
    scope: Scope,
    factory: Factory<S>,
    instance: Option<Arc<S>>,
}

/// Thread-safe registry of named implementations of `S`
///
/// Activation names are matched ASCII case-insensitively.
pub struct ServiceRegistry<S: ?Sized> {
    providers: RwLock<HashMap<String, Provider<S>>>,
}

impl<S: ?Sized + Send + Sync + 'static> ServiceRegistry<S> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a factory under `name`, replacing any previous registration
    pub fn register<F>(&self, name: &str, scope: Scope, factory: F)
    where
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        let key = activation_key(name);
        tracing::debug!(
            capability = std::any::type_name::<S>(),
            name = %key,
            ?scope,
            "registering service"
        );

        self.providers.write().insert(
            key,
            Provider {
                scope,
                factory: Arc::new(factory),
                instance: None,
            },
        );
    }

    /// Register an already built instance as a singleton
    pub fn register_instance(&self, name: &str, instance: Arc<S>) {
        let key = activation_key(name);
        let shared = instance.clone();

        self.providers.write().insert(
            key,
            Provider {
                scope: Scope::Singleton,
                factory: Arc::new(move || shared.clone()),
                instance: Some(instance),
            },
        );
    }

    /// Remove a registration, returning whether one existed
    pub fn unregister(&self, name: &str) -> bool {
        self.providers.write().remove(&activation_key(name)).is_some()
    }

    /// Whether an implementation is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.providers.read().contains_key(&activation_key(name))
    }

    /// Registered activation names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }
}

impl<S: ?Sized + Send + Sync + 'static> Default for ServiceRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized + Send + Sync + 'static> ServiceLoader<S> for ServiceRegistry<S> {
    fn load(&self, name: &str) -> Result<Arc<S>> {
        let key = activation_key(name);

        // Factories run outside the lock so they may use the registry themselves
        let (scope, factory) = {
            let providers = self.providers.read();
            let Some(provider) = providers.get(&key) else {
                tracing::debug!(
                    capability = std::any::type_name::<S>(),
                    name = %key,
                    "service not found"
                );
                return Err(LoaderError::not_found::<S>(name));
            };

            if let Some(instance) = &provider.instance {
                return Ok(instance.clone());
            }
            (provider.scope, provider.factory.clone())
        };

        let built = factory();
        if scope == Scope::Prototype {
            return Ok(built);
        }

        let mut providers = self.providers.write();
        match providers.get_mut(&key) {
            Some(provider) => Ok(provider.instance.get_or_insert(built).clone()),
            // Unregistered while building
            None => Ok(built),
        }
    }
}

impl<S: ?Sized> std::fmt::Debug for ServiceRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let providers = self.providers.read();
        let mut names: Vec<&String> = providers.keys().collect();
        names.sort();
        f.debug_struct("ServiceRegistry")
            .field("capability", &std::any::type_name::<S>())
            .field("names", &names)
            .finish()
    }
}

fn activation_key(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}
