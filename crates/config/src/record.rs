//! Parsed and merged configuration values

use confide_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Top-level key/value pairs parsed from one config file
pub type ConfigRecord = Map<String, Value>;

/// Every parsed config file keyed by environment name
pub type ConfigHash = HashMap<String, ConfigRecord>;

/// An environment's record laid over the default environment's record
///
/// This is the only value a store caches or hands out. It is immutable;
/// callers get it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    environment: String,
    values: ConfigRecord,
}

impl MergedConfig {
    pub fn new(environment: impl Into<String>, values: ConfigRecord) -> Self {
        Self {
            environment: environment.into(),
            values,
        }
    }

    /// Environment this configuration was loaded for
    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn values(&self) -> &ConfigRecord {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn into_values(self) -> ConfigRecord {
        self.values
    }

    /// Deserialize the merged values into a typed settings struct
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&Value::Object(self.values.clone())).map_err(|e| {
            Error::json(
                format!(
                    "`{}` configuration does not match the requested type: {e}",
                    self.environment
                ),
                e,
            )
        })
    }
}

impl From<MergedConfig> for Value {
    fn from(config: MergedConfig) -> Self {
        Value::Object(config.values)
    }
}
