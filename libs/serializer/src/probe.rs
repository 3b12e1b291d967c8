use std::collections::HashSet;

use parking_lot::RwLock;

use crate::catalog::SerializerType;
use crate::error::{Error, Result};

/// Checks whether an implementation is linked into the running process
///
/// Implementations must not build or otherwise touch the implementation;
/// answering the question is the only effect.
pub trait AvailabilityProbe: Send + Sync {
    /// Whether the fully-qualified `implementation` path is available
    fn is_linked(&self, implementation: &str) -> bool;
}

impl<F> AvailabilityProbe for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_linked(&self, implementation: &str) -> bool {
        self(implementation)
    }
}

/// Verify that `serializer_type` can be resolved
///
/// Core serializers are always present and skip the probe entirely.
pub fn probe(probe: &dyn AvailabilityProbe, serializer_type: SerializerType) -> Result<()> {
    let Some(artifact) = serializer_type.artifact() else {
        return Ok(());
    };

    if probe.is_linked(artifact.implementation) {
        return Ok(());
    }

    Err(Error::MissingDependency {
        serializer: serializer_type,
        implementation: artifact.implementation,
        package: artifact.package,
    })
}

/// Set of implementation paths announced by linked packages
///
/// Companion packages call [`LinkedModules::link`] while the process starts;
/// the probe then answers from this set.
#[derive(Debug, Default)]
pub struct LinkedModules {
    modules: RwLock<HashSet<String>>,
}

impl LinkedModules {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding the implementations shipped with this crate
    pub fn with_builtins() -> Self {
        let modules = Self::new();
        for implementation in crate::builtin::BUILTIN_IMPLEMENTATIONS {
            modules.link(implementation);
        }
        modules
    }

    /// Announce an implementation path
    pub fn link(&self, implementation: impl Into<String>) {
        let implementation = implementation.into();
        tracing::debug!(implementation = %implementation, "linked serializer implementation");
        self.modules.write().insert(implementation);
    }

    /// Withdraw an implementation path, returning whether it was present
    pub fn unlink(&self, implementation: &str) -> bool {
        self.modules.write().remove(implementation)
    }

    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }
}

impl AvailabilityProbe for LinkedModules {
    fn is_linked(&self, implementation: &str) -> bool {
        self.modules.read().contains(implementation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn core_serializers_skip_the_probe() {
        let calls = AtomicUsize::new(0);
        let counting = |_: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            false
        };

        for &t in SerializerType::all().iter().filter(|t| !t.is_optional()) {
            probe(&counting, t).unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn missing_optional_names_the_package() {
        let err = probe(&LinkedModules::new(), SerializerType::Protobuf).unwrap_err();

        match &err {
            Error::MissingDependency {
                serializer,
                package,
                ..
            } => {
                assert_eq!(*serializer, SerializerType::Protobuf);
                assert_eq!(*package, "constellation-serializer-protobuf");
            }
            other => panic!("Expected MissingDependency, got {:?}", other),
        }

        let msg = err.to_string();
        assert!(msg.contains("PROTOBUF"));
        assert!(msg.contains("constellation-serializer-protobuf"));
    }

    #[test]
    fn linked_optional_passes() {
        let modules = LinkedModules::new();
        let implementation = SerializerType::Protobuf.artifact().unwrap().implementation;

        modules.link(implementation);
        assert!(probe(&modules, SerializerType::Protobuf).is_ok());

        assert!(modules.unlink(implementation));
        assert!(probe(&modules, SerializerType::Protobuf).is_err());
    }

    #[test]
    fn builtins_are_linked() {
        let modules = LinkedModules::with_builtins();
        assert!(!modules.is_empty());
        assert!(modules.is_linked(crate::builtin::SEATA_IMPLEMENTATION));
    }
}
