use constellation_loader::LoaderError;
use thiserror::Error;

use crate::catalog::SerializerType;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown codec: {0}")]
    UnknownCodec(String),

    #[error(
        "{serializer} serializer implementation '{implementation}' not found. \
         Please add the '{package}' dependency"
    )]
    MissingDependency {
        serializer: SerializerType,
        implementation: &'static str,
        package: &'static str,
    },

    #[error(transparent)]
    ServiceNotFound(#[from] LoaderError),

    #[error("Codec error: {0}")]
    Codec(String),
}

pub type Result<T> = std::result::Result<T, Error>;
