use std::sync::Arc;

use constellation_config::{Configuration, MapConfiguration};
use constellation_loader::{ServiceLoader, ServiceRegistry};

use crate::builtin::register_builtins;
use crate::catalog::SerializerType;
use crate::error::Result;
use crate::probe::{probe, AvailabilityProbe, LinkedModules};
use crate::serializer::Serializer;

/// Resolves serializer types to live implementations
///
/// Holds only shared handles to its collaborators; every call re-reads them,
/// so one loader can be shared freely between threads.
#[derive(Clone)]
pub struct SerializerLoader {
    registry: Arc<dyn ServiceLoader<dyn Serializer>>,
    probe: Arc<dyn AvailabilityProbe>,
    pub(crate) config: Arc<dyn Configuration>,
}

impl SerializerLoader {
    /// Create a loader from explicit collaborators
    pub fn new(
        registry: Arc<dyn ServiceLoader<dyn Serializer>>,
        probe: Arc<dyn AvailabilityProbe>,
        config: Arc<dyn Configuration>,
    ) -> Self {
        Self {
            registry,
            probe,
            config,
        }
    }

    /// Create a builder for configuring the loader
    pub fn builder() -> SerializerLoaderBuilder {
        SerializerLoaderBuilder::new()
    }

    /// Load the implementation for `serializer_type`
    ///
    /// Optional serializers are probed first and a missing package fails
    /// before the registry is consulted. Registry misses are returned as
    /// [`Error::ServiceNotFound`](crate::Error::ServiceNotFound).
    pub fn load(&self, serializer_type: SerializerType) -> Result<Arc<dyn Serializer>> {
        if serializer_type.is_optional() {
            probe(self.probe.as_ref(), serializer_type)?;
        }

        let serializer = self.registry.load(serializer_type.name())?;
        tracing::debug!(serializer = %serializer_type, "resolved serializer");
        Ok(serializer)
    }

    /// Load by catalog name
    pub fn load_by_name(&self, name: &str) -> Result<Arc<dyn Serializer>> {
        self.load(SerializerType::by_name(name)?)
    }

    /// Load by wire tag
    pub fn load_by_code(&self, code: u8) -> Result<Arc<dyn Serializer>> {
        self.load(SerializerType::by_code(code)?)
    }
}

impl std::fmt::Debug for SerializerLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerializerLoader").finish_non_exhaustive()
    }
}

/// Builder for [`SerializerLoader`]
///
/// Unset collaborators default to a registry and probe holding the built-in
/// serializers, and an empty configuration.
#[derive(Default)]
pub struct SerializerLoaderBuilder {
    registry: Option<Arc<dyn ServiceLoader<dyn Serializer>>>,
    probe: Option<Arc<dyn AvailabilityProbe>>,
    config: Option<Arc<dyn Configuration>>,
}

impl SerializerLoaderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service registry
    pub fn registry(mut self, registry: Arc<dyn ServiceLoader<dyn Serializer>>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set the availability probe
    pub fn probe(mut self, probe: Arc<dyn AvailabilityProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Set the configuration source
    pub fn configuration(mut self, config: Arc<dyn Configuration>) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the loader
    pub fn build(self) -> SerializerLoader {
        let (registry, probe) = match (self.registry, self.probe) {
            (Some(registry), Some(probe)) => (registry, probe),
            (registry, probe) => {
                let builtin_registry = ServiceRegistry::<dyn Serializer>::new();
                let modules = LinkedModules::new();
                register_builtins(&builtin_registry, &modules);

                let registry: Arc<dyn ServiceLoader<dyn Serializer>> =
                    registry.unwrap_or_else(|| Arc::new(builtin_registry));
                let probe: Arc<dyn AvailabilityProbe> =
                    probe.unwrap_or_else(|| Arc::new(modules));
                (registry, probe)
            }
        };

        let config = self
            .config
            .unwrap_or_else(|| Arc::new(MapConfiguration::new()) as Arc<dyn Configuration>);

        SerializerLoader::new(registry, probe, config)
    }
}
