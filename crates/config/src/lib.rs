//! Environment-named JSON configuration for confide
//!
//! A [`ConfigStore`] reads every `<env>.json` file in a directory, lays the
//! requested environment over the default environment and caches the merged
//! result per environment until the caller asks for a reload.

pub mod cache;
pub mod discovery;
pub mod loader;
pub mod merge;
pub mod options;
pub mod parser;
pub mod record;
pub mod source;

pub use cache::ConfigCache;
pub use discovery::ConfigFile;
pub use loader::ConfigStore;
pub use options::StoreOptions;
pub use record::{ConfigHash, ConfigRecord, MergedConfig};
pub use source::{ConfigSource, FsSource, MemorySource};
