//! Shared fixtures for config store integration tests

#![allow(dead_code)]

use confide_config::{ConfigStore, StoreOptions};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary config directory populated with JSON files
pub struct ConfigDir {
    temp_dir: TempDir,
}

impl ConfigDir {
    pub fn new() -> Self {
        confide_core::logging::init_for_tests();
        Self {
            temp_dir: TempDir::new().expect("failed to create temp config dir"),
        }
    }

    /// Directory with the standard `default` and `development` environments
    pub fn standard() -> Self {
        let dir = Self::new();
        dir.write(
            "default",
            &serde_json::json!({"configName": "default", "defaultOnly": true}),
        );
        dir.write(
            "development",
            &serde_json::json!({"configName": "development"}),
        );
        dir
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, env: &str) -> PathBuf {
        self.path().join(format!("{env}.json"))
    }

    /// Write `<env>.json`, replacing any existing contents
    pub fn write(&self, env: &str, value: &Value) {
        let json = serde_json::to_string(value).expect("failed to serialize fixture");
        fs::write(self.file(env), json).expect("failed to write fixture");
    }

    pub fn write_raw(&self, file_name: &str, contents: &str) {
        fs::write(self.path().join(file_name), contents).expect("failed to write fixture");
    }

    pub fn options(&self) -> StoreOptions {
        StoreOptions::new().config_dir(self.path())
    }

    pub fn store(&self) -> ConfigStore {
        ConfigStore::new(self.options()).expect("failed to create store")
    }

    pub fn store_with(&self, options: StoreOptions) -> ConfigStore {
        ConfigStore::new(options.config_dir(self.path())).expect("failed to create store")
    }
}
