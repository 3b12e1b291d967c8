use serde::{Deserialize, Serialize};

use crate::catalog::SerializerType;
use crate::codec::Codec;
use crate::error::Result;

/// Capability handed out for a negotiated serializer
///
/// Object-safe so implementations can be registered and loaded by name.
/// Payloads are message bodies in their in-memory byte form; the
/// serializer turns them into its wire representation and back.
pub trait Serializer: Send + Sync {
    /// Which catalog entry this implementation provides
    fn serializer_type(&self) -> SerializerType;

    /// Encode a payload into the wire representation
    fn serialize(&self, payload: &[u8]) -> Result<Vec<u8>>;

    /// Decode a wire representation back into the payload
    fn deserialize(&self, bytes: &[u8]) -> Result<Vec<u8>>;
}

impl std::fmt::Debug for dyn Serializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Serializer")
            .field(&self.serializer_type())
            .finish()
    }
}

/// Serializer built on top of a typed [`Codec`]
#[derive(Debug, Clone, Copy)]
pub struct CodecSerializer<C> {
    serializer_type: SerializerType,
    codec: C,
}

impl<C: Codec> CodecSerializer<C> {
    pub fn new(serializer_type: SerializerType, codec: C) -> Self {
        Self {
            serializer_type,
            codec,
        }
    }

    /// Encode a typed value
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        self.codec.encode(value)
    }

    /// Decode a typed value
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, bytes: &[u8]) -> Result<T> {
        self.codec.decode(bytes)
    }
}

impl<C: Codec> Serializer for CodecSerializer<C> {
    fn serializer_type(&self) -> SerializerType {
        self.serializer_type
    }

    fn serialize(&self, payload: &[u8]) -> Result<Vec<u8>> {
        self.codec.encode(payload)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        self.codec.decode(bytes)
    }
}
