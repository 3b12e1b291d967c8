use crate::source::Configuration;

const DEFAULT_PREFIX: &str = "CONSTELLATION";

/// Configuration backed by process environment variables
///
/// A key such as `transport.serialization` is looked up as
/// `CONSTELLATION_TRANSPORT_SERIALIZATION`.
#[derive(Debug, Clone)]
pub struct EnvConfiguration {
    prefix: String,
}

impl EnvConfiguration {
    /// Use the default `CONSTELLATION` prefix
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Use a custom variable prefix (an empty prefix disables prefixing)
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable name for a configuration key
    pub fn variable_name(&self, key: &str) -> String {
        let mangled: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();

        if self.prefix.is_empty() {
            mangled
        } else {
            format!("{}_{}", self.prefix, mangled)
        }
    }
}

impl Default for EnvConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration for EnvConfiguration {
    fn get(&self, key: &str) -> Option<String> {
        let name = self.variable_name(key);
        let value = std::env::var(&name).ok();
        tracing::trace!(
            key,
            variable = %name,
            found = value.is_some(),
            "environment configuration lookup"
        );
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_names_are_mangled() {
        let env = EnvConfiguration::new();
        assert_eq!(
            env.variable_name("transport.serialization"),
            "CONSTELLATION_TRANSPORT_SERIALIZATION"
        );
        assert_eq!(
            EnvConfiguration::with_prefix("").variable_name("client.rm-report"),
            "CLIENT_RM_REPORT"
        );
    }

    #[test]
    fn reads_process_environment() {
        let env = EnvConfiguration::with_prefix("CONSTELLATION_ENV_UNIT");
        std::env::set_var("CONSTELLATION_ENV_UNIT_TRANSPORT_SERIALIZATION", "KRYO");
        assert_eq!(env.get("transport.serialization").as_deref(), Some("KRYO"));

        std::env::remove_var("CONSTELLATION_ENV_UNIT_TRANSPORT_SERIALIZATION");
        assert_eq!(env.get("transport.serialization"), None);
    }
}
