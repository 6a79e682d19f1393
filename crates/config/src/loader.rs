//! Configuration store for confide
//!
//! The store ties the pipeline together: list the config directory, read and
//! decode every environment file concurrently, merge the requested environment
//! over the default one, and memoize the merged result until a reload.

use crate::{
    cache::ConfigCache,
    discovery::list_config_files,
    merge::merge_configs,
    options::{StoreOptions, StoreSettings},
    parser::parse_config_files,
    record::MergedConfig,
    source::{ConfigSource, FsSource},
};
use confide_core::{Error, Result, MISSING_ENVIRONMENT_MESSAGE};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Loads, merges and caches environment configuration
///
/// A store is `Send + Sync` when its source is; share it behind an `Arc` to
/// load from several tasks. Concurrent uncached loads of the same environment
/// are not deduplicated and the last one to finish wins the cache slot.
#[derive(Debug)]
pub struct ConfigStore<S = FsSource> {
    settings: StoreSettings,
    source: S,
    cache: ConfigCache,
}

impl ConfigStore<FsSource> {
    /// Create a store reading from the local file system
    ///
    /// Fails if no config directory was given. Nothing is read until the
    /// first [`ConfigStore::load`].
    pub fn new(options: StoreOptions) -> Result<Self> {
        Self::with_source(options, FsSource)
    }
}

impl<S: ConfigSource> ConfigStore<S> {
    /// Create a store over a custom source
    pub fn with_source(options: StoreOptions, source: S) -> Result<Self> {
        let settings = options.validate()?;
        debug!(
            config_dir = %settings.config_dir.display(),
            default_env = %settings.default_env,
            cache = settings.cache,
            "created config store"
        );

        Ok(Self {
            settings,
            source,
            cache: ConfigCache::new(),
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.settings.config_dir
    }

    pub fn default_env(&self) -> &str {
        &self.settings.default_env
    }

    pub fn cache_enabled(&self) -> bool {
        self.settings.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the merged configuration for `env`, or the default environment
    ///
    /// Cached results are returned without touching the source. Otherwise
    /// every config file is read and parsed; any failure aborts the load and
    /// nothing is cached.
    #[instrument(skip(self), fields(config_dir = %self.settings.config_dir.display()))]
    pub async fn load(&self, env: Option<&str>) -> Result<Arc<MergedConfig>> {
        let env = self.resolve_env(env)?;

        if self.settings.cache {
            if let Some(cached) = self.cache.get(env) {
                debug!(environment = %env, "config cache hit");
                return Ok(cached);
            }
            debug!(environment = %env, "config cache miss");
        }

        let files = list_config_files(&self.source, &self.settings.config_dir).await?;
        let hash = parse_config_files(&self.source, &files).await?;
        let values = merge_configs(env, &self.settings.default_env, &hash)?;
        let merged = Arc::new(MergedConfig::new(env, values));

        if self.settings.cache {
            self.cache.insert(env, Arc::clone(&merged));
        }

        debug!(
            environment = %env,
            keys = merged.values().len(),
            files = files.len(),
            "loaded config"
        );
        Ok(merged)
    }

    /// Drop every cached environment, then load `env` from the source
    ///
    /// The whole cache goes, not just `env`, because a change to the default
    /// file affects every environment merged over it.
    #[instrument(skip(self))]
    pub async fn reload(&self, env: Option<&str>) -> Result<Arc<MergedConfig>> {
        self.clear_cache();
        self.load(env).await
    }

    /// Drop every cached environment without loading anything
    pub fn clear_cache(&self) -> usize {
        let removed = self.cache.clear();
        if removed > 0 {
            info!(removed, "cleared config cache");
        }
        removed
    }

    pub fn is_cached(&self, env: &str) -> bool {
        self.cache.contains(env)
    }

    /// Environments currently held in the cache, sorted
    pub fn cached_environments(&self) -> Vec<String> {
        self.cache.environments()
    }

    /// Environment names that have a file in the config directory, sorted
    ///
    /// Only lists the directory; files are neither read nor cached.
    pub async fn environments(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = list_config_files(&self.source, &self.settings.config_dir)
            .await?
            .into_iter()
            .map(|file| file.environment)
            .collect();
        names.sort();
        Ok(names)
    }

    fn resolve_env<'a>(&'a self, env: Option<&'a str>) -> Result<&'a str> {
        match env.filter(|e| !e.is_empty()) {
            Some(env) => Ok(env),
            None if !self.settings.default_env.is_empty() => {
                Ok(self.settings.default_env.as_str())
            }
            None => Err(Error::configuration(MISSING_ENVIRONMENT_MESSAGE)),
        }
    }
}
