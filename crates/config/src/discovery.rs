//! Discovery of environment files inside the config directory

use crate::source::ConfigSource;
use confide_core::{Error, Result, CONFIG_FILE_SUFFIX};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A `<env>.json` file found in the config directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// File name with the `.json` suffix stripped
    pub environment: String,
    /// Full path to the file
    pub path: PathBuf,
}

impl ConfigFile {
    /// Build a config file entry if `file_name` ends with `.json`
    pub fn from_name(dir: &Path, file_name: &str) -> Option<Self> {
        environment_name(file_name).map(|environment| Self {
            environment: environment.to_string(),
            path: dir.join(file_name),
        })
    }
}

/// Environment name for a config file name, matched case-sensitively at the end
pub fn environment_name(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(CONFIG_FILE_SUFFIX)
}

/// List every config file in `dir`, in the order the source returns them
pub async fn list_config_files<S>(source: &S, dir: &Path) -> Result<Vec<ConfigFile>>
where
    S: ConfigSource + ?Sized,
{
    let names = source
        .list(dir)
        .await
        .map_err(|e| {
            warn!(dir = %dir.display(), error = %e, "failed to list config directory");
            Error::file_system(dir, "list", e)
        })?;

    let files: Vec<ConfigFile> = names
        .iter()
        .filter_map(|name| ConfigFile::from_name(dir, name))
        .collect();

    debug!(
        dir = %dir.display(),
        entries = names.len(),
        config_files = files.len(),
        "listed config directory"
    );

    Ok(files)
}
