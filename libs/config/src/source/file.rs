use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use toml::{Table, Value};

use crate::error::{ConfigError, Result};
use crate::source::Configuration;

/// Configuration loaded once from a TOML document
///
/// Nested tables are flattened into dotted keys, so
///
/// ```toml
/// [transport]
/// serialization = "SEATA,KRYO"
/// ```
///
/// answers `transport.serialization`. Arrays of scalars are joined with `,`.
#[derive(Debug, Clone)]
pub struct FileConfiguration {
    root: Table,
    flattened: HashMap<String, String>,
}

impl FileConfiguration {
    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            keys = config.flattened.len(),
            "loaded configuration file"
        );
        Ok(config)
    }

    /// Parse TOML content held in memory
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let root: Table = toml::from_str(content)?;
        let mut flattened = HashMap::new();
        flatten_into(&mut flattened, None, &root);
        Ok(Self { root, flattened })
    }

    /// Deserialize the table found under a dotted key into `T`
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let mut current = &self.root;
        let mut parts = key.split('.').peekable();

        while let Some(part) = parts.next() {
            let value = current
                .get(part)
                .ok_or_else(|| ConfigError::custom(format!("Missing section: {key}")))?;

            if parts.peek().is_none() {
                return Ok(value.clone().try_into()?);
            }

            current = value
                .as_table()
                .ok_or_else(|| ConfigError::custom(format!("Not a table: {key}")))?;
        }

        Err(ConfigError::custom("Empty section key"))
    }
}

impl Configuration for FileConfiguration {
    fn get(&self, key: &str) -> Option<String> {
        self.flattened.get(key).cloned()
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: Option<&str>, table: &Table) {
    for (name, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };

        match value {
            Value::Table(inner) => flatten_into(out, Some(&key), inner),
            Value::Array(items) => {
                let rendered: Option<Vec<String>> = items.iter().map(render_scalar).collect();
                match rendered {
                    Some(items) => {
                        out.insert(key, items.join(","));
                    }
                    None => tracing::trace!(key = %key, "skipping array of tables"),
                }
            }
            scalar => {
                if let Some(rendered) = render_scalar(scalar) {
                    out.insert(key, rendered);
                }
            }
        }
    }
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(d) => Some(d.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}
