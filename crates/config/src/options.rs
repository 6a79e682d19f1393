//! Store options and their validation
//!
//! `StoreOptions` is what callers hand to [`crate::ConfigStore::new`]. It can be
//! built in code, deserialized from a JSON options object using the camelCase
//! names `configDir`, `defaultEnv` and `cache`, or read from `CONFIDE_*`
//! environment variables. Validation turns it into immutable `StoreSettings`.

use confide_core::{
    Error, Result, CONFIDE_CACHE_VAR, CONFIDE_CONFIG_DIR_VAR, CONFIDE_DEFAULT_ENV_VAR,
    DEFAULT_ENVIRONMENT, MISSING_CONFIG_DIR_MESSAGE,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Caller-supplied options for a config store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreOptions {
    /// Directory scanned for `<env>.json` files. Required.
    pub config_dir: Option<PathBuf>,

    /// Environment whose record is the merge base
    pub default_env: String,

    /// Whether merged results are memoized per environment
    pub cache: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            config_dir: None,
            default_env: DEFAULT_ENVIRONMENT.to_string(),
            cache: true,
        }
    }
}

impl StoreOptions {
    /// Create options with all defaults and no config directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory to load configuration files from
    pub fn config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Set the default environment name
    pub fn default_env(mut self, env: impl Into<String>) -> Self {
        self.default_env = env.into();
        self
    }

    /// Enable or disable caching of merged results
    pub fn cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    /// Deserialize options from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from `CONFIDE_CONFIG_DIR`, `CONFIDE_DEFAULT_ENV` and
    /// `CONFIDE_CACHE`, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(dir) = lookup(CONFIDE_CONFIG_DIR_VAR) {
            options.config_dir = Some(PathBuf::from(dir));
        }
        if let Some(env) = lookup(CONFIDE_DEFAULT_ENV_VAR) {
            options.default_env = env;
        }
        if let Some(raw) = lookup(CONFIDE_CACHE_VAR) {
            options.cache = parse_flag(&raw).ok_or_else(|| {
                Error::configuration(format!(
                    "{CONFIDE_CACHE_VAR} must be a boolean, got '{raw}'"
                ))
            })?;
        }

        Ok(options)
    }

    /// Check required fields and freeze the options
    pub(crate) fn validate(self) -> Result<StoreSettings> {
        let config_dir = match self.config_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => return Err(Error::configuration(MISSING_CONFIG_DIR_MESSAGE)),
        };

        Ok(StoreSettings {
            config_dir,
            default_env: self.default_env,
            cache: self.cache,
        })
    }
}

/// Validated, immutable settings owned by a store
#[derive(Debug, Clone)]
pub(crate) struct StoreSettings {
    pub config_dir: PathBuf,
    pub default_env: String,
    pub cache: bool,
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
