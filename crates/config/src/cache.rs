//! Per-environment memoization of merged configuration

use crate::record::MergedConfig;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Merged configuration keyed by environment name
///
/// Entries only ever leave through [`ConfigCache::clear`]; there is no
/// per-key invalidation. Locks are never held across an await point.
#[derive(Debug, Default)]
pub struct ConfigCache {
    entries: RwLock<HashMap<String, Arc<MergedConfig>>>,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, env: &str) -> Option<Arc<MergedConfig>> {
        self.entries.read().get(env).cloned()
    }

    /// Store `config` under `env`, replacing any previous entry
    pub fn insert(&self, env: impl Into<String>, config: Arc<MergedConfig>) {
        self.entries.write().insert(env.into(), config);
    }

    /// Drop every entry, returning how many were removed
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let removed = entries.len();
        entries.clear();
        removed
    }

    pub fn contains(&self, env: &str) -> bool {
        self.entries.read().contains_key(env)
    }

    /// Cached environment names, sorted
    pub fn environments(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort();
        names
    }
}
