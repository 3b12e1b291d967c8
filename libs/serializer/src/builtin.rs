use std::sync::Arc;

use constellation_loader::{Scope, ServiceRegistry};

use crate::catalog::SerializerType;
use crate::codec::BincodeCodec;
use crate::probe::LinkedModules;
use crate::serializer::{CodecSerializer, Serializer};

/// Compact built-in wire format
pub type SeataSerializer = CodecSerializer<BincodeCodec>;

pub const SEATA_IMPLEMENTATION: &str = "constellation_serializer::builtin::SeataSerializer";

/// Implementation paths shipped with this crate
pub const BUILTIN_IMPLEMENTATIONS: [&str; 1] = [SEATA_IMPLEMENTATION];

pub fn seata() -> SeataSerializer {
    CodecSerializer::new(SerializerType::Seata, BincodeCodec)
}

/// Make an implementation available under its catalog name
///
/// Links `implementation` so the availability probe finds it and registers
/// `factory` under `serializer_type`'s activation name.
pub fn install<F>(
    registry: &ServiceRegistry<dyn Serializer>,
    modules: &LinkedModules,
    serializer_type: SerializerType,
    implementation: &str,
    scope: Scope,
    factory: F,
) where
    F: Fn() -> Arc<dyn Serializer> + Send + Sync + 'static,
{
    modules.link(implementation);
    registry.register(serializer_type.name(), scope, factory);
}

/// Install every serializer shipped with this crate
pub fn register_builtins(registry: &ServiceRegistry<dyn Serializer>, modules: &LinkedModules) {
    install(
        registry,
        modules,
        SerializerType::Seata,
        SEATA_IMPLEMENTATION,
        Scope::Singleton,
        || Arc::new(seata()) as Arc<dyn Serializer>,
    );
}
