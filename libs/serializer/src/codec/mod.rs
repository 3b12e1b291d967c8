use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod bincode;

pub use self::bincode::BincodeCodec;

/// Codec trait for serializing and deserializing typed messages
pub trait Codec: Send + Sync {
    /// Encode a value into bytes
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>>;

    /// Decode bytes into a value
    fn decode<T: for<'de> Deserialize<'de>>(&self, bytes: &[u8]) -> Result<T>;
}
