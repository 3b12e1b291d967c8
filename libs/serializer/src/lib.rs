//! Constellation Serializer - Serializer resolution for RPC
//!
//! Maps the serializer names and wire tags used by the RPC protocol to live
//! [`Serializer`] implementations, and computes the set of serializers a node
//! is willing to negotiate.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use constellation_config::{keys, MapConfiguration};
//! use constellation_serializer::{Serializer, SerializerLoader, SerializerType};
//!
//! # fn example() -> Result<(), constellation_serializer::Error> {
//! let config = MapConfiguration::new().with(keys::TRANSPORT_SERIALIZATION, "SEATA,KRYO");
//! let loader = SerializerLoader::builder()
//!     .configuration(Arc::new(config))
//!     .build();
//!
//! // What this node advertises during negotiation
//! let supported = loader.supported_serializers();
//! assert!(supported.contains(&SerializerType::Seata));
//!
//! // The implementation for the negotiated serializer
//! let serializer = loader.load(SerializerType::Seata)?;
//! let wire = serializer.serialize(b"payload")?;
//! assert_eq!(serializer.deserialize(&wire)?, b"payload");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builtin;
pub mod catalog;
pub mod codec;
pub mod error;
pub mod probe;
pub mod resolver;
pub mod serializer;
pub mod supported;

// Re-exports for convenience
pub use catalog::{OptionalArtifact, SerializerType};
pub use error::{Error, Result};
pub use probe::{AvailabilityProbe, LinkedModules};
pub use resolver::{SerializerLoader, SerializerLoaderBuilder};
pub use serializer::{CodecSerializer, Serializer};
pub use supported::{default_list, SupportedSerializers, DEFAULT_SERIALIZERS};
