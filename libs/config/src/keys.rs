//! Well-known configuration keys

/// Comma-separated list of serializer names enabled for RPC
pub const TRANSPORT_SERIALIZATION: &str = "transport.serialization";
