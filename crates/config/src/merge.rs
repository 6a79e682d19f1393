//! Overlaying an environment on the default environment

use crate::record::{ConfigHash, ConfigRecord};
use confide_core::{Error, Result};
use tracing::warn;

/// One-level overlay: every key in `overrides` wins, keys only in `base` are kept
///
/// Nested objects are replaced wholesale, never merged recursively.
pub fn overlay(base: &ConfigRecord, overrides: &ConfigRecord) -> ConfigRecord {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Merge the record for `env` over the record for `default_env`
///
/// `env` must have its own file even when a default exists. A missing
/// default file contributes nothing.
pub fn merge_configs(env: &str, default_env: &str, hash: &ConfigHash) -> Result<ConfigRecord> {
    let env_record = hash.get(env).ok_or_else(|| {
        warn!(environment = %env, "requested environment has no config file");
        Error::not_found(env)
    })?;

    Ok(match hash.get(default_env) {
        Some(default_record) => overlay(default_record, env_record),
        None => env_record.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::LogCapture;
    use serde_json::{json, Value};

    fn record(value: Value) -> ConfigRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn hash(entries: &[(&str, Value)]) -> ConfigHash {
        entries
            .iter()
            .map(|(env, value)| (env.to_string(), record(value.clone())))
            .collect()
    }

    #[test]
    fn test_environment_overrides_default() {
        let hash = hash(&[
            (
                "default",
                json!({"configName": "default", "defaultOnly": true}),
            ),
            ("development", json!({"configName": "development"})),
        ]);

        let merged = merge_configs("development", "default", &hash).unwrap();
        assert_eq!(
            Value::Object(merged),
            json!({"configName": "development", "defaultOnly": true})
        );
    }

    #[test]
    fn test_default_merged_with_itself() {
        let hash = hash(&[("default", json!({"configName": "default"}))]);

        let merged = merge_configs("default", "default", &hash).unwrap();
        assert_eq!(Value::Object(merged), json!({"configName": "default"}));
    }

    #[test]
    fn test_missing_default_file_is_empty_base() {
        let hash = hash(&[("production", json!({"port": 443}))]);

        let merged = merge_configs("production", "default", &hash).unwrap();
        assert_eq!(Value::Object(merged), json!({"port": 443}));
    }

    #[test]
    fn test_missing_environment_fails_even_with_default() {
        let hash = hash(&[("default", json!({"configName": "default"}))]);

        let err = merge_configs("bazinga", "default", &hash).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "`bazinga` configuration not present");
    }

    #[test]
    fn test_missing_environment_is_logged() {
        let hash = hash(&[("default", json!({"configName": "default"}))]);
        let capture = LogCapture::default();

        let result = tracing::subscriber::with_default(capture.subscriber(), || {
            merge_configs("bazinga", "default", &hash)
        });

        assert!(result.is_err());
        let logs = capture.contents();
        assert!(logs.contains("WARN"));
        assert!(logs.contains("requested environment has no config file"));
        assert!(logs.contains("bazinga"));
    }

    #[test]
    fn test_overlay_is_shallow() {
        let base = record(json!({"db": {"host": "localhost", "port": 5432}, "debug": false}));
        let overrides = record(json!({"db": {"host": "db.internal"}}));

        let merged = overlay(&base, &overrides);
        assert_eq!(
            Value::Object(merged),
            json!({"db": {"host": "db.internal"}, "debug": false})
        );
    }

    #[test]
    fn test_overlay_keeps_explicit_null() {
        let base = record(json!({"timeout": 30}));
        let overrides = record(json!({"timeout": null}));

        let merged = overlay(&base, &overrides);
        assert_eq!(merged.get("timeout"), Some(&Value::Null));
    }
}
