//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { message } => f.write_str(message),
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(f, "could not {} `{}`: {}", operation, path.display(), source)
            }
            Error::Parse { path, message, .. } => {
                write!(f, "could not parse `{}`: {}", path.display(), message)
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
            Error::NotFound { environment } => {
                write!(f, "`{environment}` configuration not present")
            }
        }
    }
}
