use std::collections::HashSet;

use constellation_config::{keys, Configuration};

use crate::catalog::SerializerType;
use crate::resolver::SerializerLoader;

/// Serializers advertised when the operator configures nothing
pub const DEFAULT_SERIALIZERS: [SerializerType; 4] = [
    SerializerType::Seata,
    SerializerType::Protobuf,
    SerializerType::Kryo,
    SerializerType::Hessian,
];

const SPLIT_CHAR: &str = ",";

/// [`DEFAULT_SERIALIZERS`] as a configuration value
pub fn default_list() -> String {
    DEFAULT_SERIALIZERS
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(SPLIT_CHAR)
}

/// Outcome of parsing a serializer list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedSerializers {
    /// Recognised serializers
    pub accepted: HashSet<SerializerType>,
    /// Tokens that named no serializer, in input order
    pub rejected: Vec<String>,
}

impl SupportedSerializers {
    /// Parse a comma-separated list of serializer names
    ///
    /// Tokens are matched as written and unknown ones are logged and
    /// skipped. An empty list names no serializers.
    pub fn parse(list: &str) -> Self {
        let mut supported = Self::default();
        if list.is_empty() {
            return supported;
        }

        for token in list.split(SPLIT_CHAR) {
            match SerializerType::by_name(token) {
                Ok(serializer_type) => {
                    supported.accepted.insert(serializer_type);
                }
                Err(_) => {
                    tracing::warn!(token, "Invalid serializer name: {}", token);
                    supported.rejected.push(token.to_string());
                }
            }
        }

        supported
    }

    pub fn contains(&self, serializer_type: SerializerType) -> bool {
        self.accepted.contains(&serializer_type)
    }

    pub fn into_set(self) -> HashSet<SerializerType> {
        self.accepted
    }
}

/// Serializers enabled by `config`
///
/// Reads [`keys::TRANSPORT_SERIALIZATION`], falling back to
/// [`default_list`] when the key is absent.
pub fn supported_serializers(config: &dyn Configuration) -> HashSet<SerializerType> {
    supported_report(config).into_set()
}

/// Like [`supported_serializers`], keeping the rejected tokens
pub fn supported_report(config: &dyn Configuration) -> SupportedSerializers {
    let list = config.get_or(keys::TRANSPORT_SERIALIZATION, &default_list());
    SupportedSerializers::parse(&list)
}

impl SerializerLoader {
    /// Serializers this process advertises and accepts for RPC
    pub fn supported_serializers(&self) -> HashSet<SerializerType> {
        supported_serializers(self.config.as_ref())
    }

    /// Supported set along with the configuration tokens that were skipped
    pub fn supported_report(&self) -> SupportedSerializers {
        supported_report(self.config.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_config::MapConfiguration;
    use tracing_test::traced_test;

    fn with_override(list: &str) -> MapConfiguration {
        MapConfiguration::new().with(keys::TRANSPORT_SERIALIZATION, list)
    }

    #[test]
    fn default_list_is_ordered() {
        assert_eq!(default_list(), "SEATA,PROTOBUF,KRYO,HESSIAN");
    }

    #[test]
    fn absent_key_yields_defaults() {
        let set = supported_serializers(&MapConfiguration::new());
        assert_eq!(set, DEFAULT_SERIALIZERS.into_iter().collect::<HashSet<_>>());
        assert_eq!(set.len(), 4);
    }

    #[traced_test]
    #[test]
    fn unknown_token_warns_once_and_is_skipped() {
        let report = supported_report(&with_override("SEATA,BOGUS,KRYO"));

        assert_eq!(
            report.accepted,
            HashSet::from([SerializerType::Seata, SerializerType::Kryo])
        );
        assert_eq!(report.rejected, vec!["BOGUS"]);

        assert!(logs_contain("Invalid serializer name: BOGUS"));
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("Invalid serializer name"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("Expected one warning, got {}", n)),
            }
        });
    }

    #[test]
    fn repeated_tokens_collapse() {
        let set = supported_serializers(&with_override("SEATA,SEATA,KRYO"));
        assert_eq!(set, HashSet::from([SerializerType::Seata, SerializerType::Kryo]));
    }

    #[traced_test]
    #[test]
    fn explicitly_empty_list_is_empty_set() {
        let report = supported_report(&with_override(""));

        assert!(report.accepted.is_empty());
        assert!(report.rejected.is_empty());
        assert!(!logs_contain("Invalid serializer name"));
    }

    #[traced_test]
    #[test]
    fn padded_tokens_are_rejected_with_a_warning() {
        let report = SupportedSerializers::parse(" seata ,Hessian");

        assert_eq!(report.accepted, HashSet::from([SerializerType::Hessian]));
        assert_eq!(report.rejected, vec![" seata "]);
        assert!(logs_contain("Invalid serializer name:  seata "));
    }

    #[test]
    fn padded_override_matches_catalog_lookup() {
        let set = supported_serializers(&with_override("SEATA, PROTOBUF"));

        assert!(SerializerType::by_name(" PROTOBUF").is_err());
        assert_eq!(set, HashSet::from([SerializerType::Seata]));
    }

    #[traced_test]
    #[test]
    fn blank_token_inside_list_warns() {
        let report = SupportedSerializers::parse("SEATA,,KRYO");

        assert_eq!(
            report.accepted,
            HashSet::from([SerializerType::Seata, SerializerType::Kryo])
        );
        assert_eq!(report.rejected, vec![""]);
        assert!(logs_contain("Invalid serializer name"));
    }

    #[test]
    fn lowercase_tokens_are_case_folded() {
        let report = SupportedSerializers::parse("seata,Hessian");

        assert!(report.contains(SerializerType::Seata));
        assert!(report.contains(SerializerType::Hessian));
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(
            SupportedSerializers::parse("KRYO,SEATA"),
            SupportedSerializers::parse("SEATA,KRYO")
        );
    }
}
