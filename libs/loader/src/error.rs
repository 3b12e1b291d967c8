use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("No {capability} registered under '{name}'")]
    ServiceNotFound {
        capability: &'static str,
        name: String,
    },
}

impl LoaderError {
    pub fn not_found<S: ?Sized>(name: impl Into<String>) -> Self {
        Self::ServiceNotFound {
            capability: std::any::type_name::<S>(),
            name: name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
