use std::sync::Arc;

pub mod env;
pub mod file;
pub mod layered;
pub mod memory;

pub use self::env::EnvConfiguration;
pub use self::file::FileConfiguration;
pub use self::layered::LayeredConfiguration;
pub use self::memory::MapConfiguration;

/// Read access to string-valued configuration
///
/// Implementations are shared between threads and handle their own
/// synchronisation.
pub trait Configuration: Send + Sync {
    /// Look up the current value for `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Look up `key`, falling back to `default` when it is absent
    ///
    /// An explicitly empty value is returned as-is.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

impl<T: Configuration + ?Sized> Configuration for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<T: Configuration + ?Sized> Configuration for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<T: Configuration + ?Sized> Configuration for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
