//! Constellation Loader - Named service registry
//!
//! Implementations of a capability (a trait object type such as
//! `dyn Serializer`) are registered under an activation name and loaded back
//! by that name.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use constellation_loader::{Scope, ServiceLoader, ServiceRegistry};
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! let registry: ServiceRegistry<dyn Greeter> = ServiceRegistry::new();
//! registry.register("english", Scope::Singleton, || Arc::new(English) as Arc<dyn Greeter>);
//!
//! let greeter = registry.load("ENGLISH").unwrap();
//! assert_eq!(greeter.greet(), "hello");
//! assert!(registry.load("french").is_err());
//! ```

pub mod error;
pub mod registry;

// Re-exports for convenience
pub use error::{LoaderError, Result};
pub use registry::{Scope, ServiceLoader, ServiceRegistry};
