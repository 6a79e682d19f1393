//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for confide operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for confide operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid store setup, or no environment to load
    Configuration { message: String },

    /// Directory listing or file read failures
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed or unusable JSON content
    Parse {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// JSON conversion errors outside of file parsing
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The requested environment has no configuration file
    NotFound { environment: String },
}
