use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Serialization formats known on the wire
///
/// The discriminant is the one-byte codec tag carried in protocol headers,
/// and [`SerializerType::name`] is the activation name used to look the
/// implementation up in the service registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SerializerType {
    /// Compact built-in format
    Seata = 0x01,
    Protobuf = 0x02,
    Kryo = 0x04,
    Fst = 0x08,
    Hessian = 0x16,
    Jackson = 0x32,
    Fastjson2 = 0x64,
}

/// Separately deployed package that provides an optional serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalArtifact {
    /// Fully-qualified path of the implementation type
    pub implementation: &'static str,
    /// Package an operator must add to make the implementation available
    pub package: &'static str,
}

const PROTOBUF_ARTIFACT: OptionalArtifact = OptionalArtifact {
    implementation: "constellation_serializer_protobuf::ProtobufSerializer",
    package: "constellation-serializer-protobuf",
};

const ALL: [SerializerType; 7] = [
    SerializerType::Seata,
    SerializerType::Protobuf,
    SerializerType::Kryo,
    SerializerType::Fst,
    SerializerType::Hessian,
    SerializerType::Jackson,
    SerializerType::Fastjson2,
];

impl SerializerType {
    /// Canonical uppercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seata => "SEATA",
            Self::Protobuf => "PROTOBUF",
            Self::Kryo => "KRYO",
            Self::Fst => "FST",
            Self::Hessian => "HESSIAN",
            Self::Jackson => "JACKSON",
            Self::Fastjson2 => "FASTJSON2",
        }
    }

    /// Wire tag
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up by name, ignoring ASCII case
    pub fn by_name(name: &str) -> Result<Self> {
        ALL.iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownCodec(name.to_string()))
    }

    /// Look up by wire tag
    pub fn by_code(code: u8) -> Result<Self> {
        ALL.iter()
            .copied()
            .find(|t| t.code() == code)
            .ok_or_else(|| Error::UnknownCodec(format!("{code:#04x}")))
    }

    /// The package providing this serializer, when it is not part of the core
    pub const fn artifact(self) -> Option<&'static OptionalArtifact> {
        match self {
            Self::Protobuf => Some(&PROTOBUF_ARTIFACT),
            _ => None,
        }
    }

    pub const fn is_optional(self) -> bool {
        self.artifact().is_some()
    }

    /// Every entry, in declaration order
    pub fn all() -> &'static [SerializerType] {
        &ALL
    }

    pub fn all_names() -> impl Iterator<Item = &'static str> {
        ALL.iter().map(|t| t.name())
    }
}

impl fmt::Display for SerializerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SerializerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::by_name(s)
    }
}

impl TryFrom<u8> for SerializerType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::by_code(code)
    }
}

impl From<SerializerType> for u8 {
    fn from(value: SerializerType) -> Self {
        value.code()
    }
}

impl Serialize for SerializerType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SerializerType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::by_name(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_codes_round_trip() {
        for &t in SerializerType::all() {
            assert_eq!(SerializerType::by_name(t.name()).unwrap(), t);
            assert_eq!(SerializerType::by_name(t.name()).unwrap().name(), t.name());

            let code = SerializerType::by_name(t.name()).unwrap().code();
            assert_eq!(SerializerType::by_code(code).unwrap(), t);
        }
    }

    #[test]
    fn mapping_is_bijective() {
        let mut names: Vec<_> = SerializerType::all_names().collect();
        let mut codes: Vec<_> = SerializerType::all().iter().map(|t| t.code()).collect();
        names.sort_unstable();
        names.dedup();
        codes.sort_unstable();
        codes.dedup();

        assert_eq!(names.len(), SerializerType::all().len());
        assert_eq!(codes.len(), SerializerType::all().len());
    }

    #[test]
    fn names_are_uppercase_and_ordered() {
        assert_eq!(
            SerializerType::all_names().collect::<Vec<_>>(),
            ["SEATA", "PROTOBUF", "KRYO", "FST", "HESSIAN", "JACKSON", "FASTJSON2"]
        );
        assert!(SerializerType::all_names().all(|n| n == n.to_ascii_uppercase()));
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(SerializerType::by_name("kryo").unwrap(), SerializerType::Kryo);
        assert_eq!("Hessian".parse::<SerializerType>().unwrap(), SerializerType::Hessian);
    }

    #[test]
    fn unknown_lookups_fail() {
        match SerializerType::by_name("BOGUS") {
            Err(Error::UnknownCodec(name)) => assert_eq!(name, "BOGUS"),
            other => panic!("Expected UnknownCodec, got {:?}", other),
        }
        assert!(SerializerType::by_name("").is_err());
        assert!(SerializerType::by_name(" SEATA").is_err());

        match SerializerType::try_from(0x03u8) {
            Err(Error::UnknownCodec(code)) => assert_eq!(code, "0x03"),
            other => panic!("Expected UnknownCodec, got {:?}", other),
        }
    }

    #[test]
    fn only_protobuf_is_optional() {
        let optional: Vec<_> = SerializerType::all()
            .iter()
            .filter(|t| t.is_optional())
            .collect();
        assert_eq!(optional, [&SerializerType::Protobuf]);

        let artifact = SerializerType::Protobuf.artifact().unwrap();
        assert_eq!(artifact.package, "constellation-serializer-protobuf");
    }

    #[test]
    fn serde_uses_names() {
        let bytes = bincode::serialize(&SerializerType::Kryo).unwrap();
        assert_eq!(bincode::deserialize::<String>(&bytes).unwrap(), "KRYO");
        assert_eq!(
            bincode::deserialize::<SerializerType>(&bytes).unwrap(),
            SerializerType::Kryo
        );

        let bogus = bincode::serialize("BOGUS").unwrap();
        assert!(bincode::deserialize::<SerializerType>(&bogus).is_err());
    }

    #[test]
    fn display_is_name() {
        assert_eq!(SerializerType::Fastjson2.to_string(), "FASTJSON2");
        assert_eq!(u8::from(SerializerType::Hessian), 0x16);
    }
}
