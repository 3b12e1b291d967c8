//! Constellation Config - Key/value configuration store
//!
//! Provides the [`Configuration`] lookup trait used by the rest of the
//! workspace, together with in-memory, environment, TOML file and layered
//! sources.
//!
//! # Example
//!
//! ```
//! use constellation_config::{keys, Configuration, LayeredConfiguration, MapConfiguration};
//!
//! let overrides = MapConfiguration::new().with(keys::TRANSPORT_SERIALIZATION, "SEATA,KRYO");
//! let config = LayeredConfiguration::new().with_source(overrides);
//!
//! assert_eq!(
//!     config.get_or(keys::TRANSPORT_SERIALIZATION, "SEATA"),
//!     "SEATA,KRYO"
//! );
//! assert_eq!(config.get("transport.compressor"), None);
//! ```

pub mod error;
pub mod keys;
pub mod source;

// Re-exports for convenience
pub use error::{ConfigError, Result};
pub use source::{
    Configuration, EnvConfiguration, FileConfiguration, LayeredConfiguration, MapConfiguration,
};
