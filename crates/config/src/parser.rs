//! Reading and decoding config files

use crate::discovery::ConfigFile;
use crate::record::{ConfigHash, ConfigRecord};
use crate::source::ConfigSource;
use confide_core::{Error, Result};
use futures::future::try_join_all;
use serde_json::Value;
use std::path::Path;
use tracing::{trace, warn};

/// Decode one file's contents into a record
///
/// The top-level JSON value must be an object.
pub fn parse_record(path: &Path, contents: &[u8]) -> Result<ConfigRecord> {
    let value: Value =
        serde_json::from_slice(contents).map_err(|e| Error::parse_with_source(path, e))?;

    match value {
        Value::Object(record) => Ok(record),
        other => Err(Error::parse(
            path,
            format!("expected a JSON object, found {}", json_type(&other)),
        )),
    }
}

/// Read and decode a single config file
pub async fn parse_config_file<S>(source: &S, file: &ConfigFile) -> Result<ConfigRecord>
where
    S: ConfigSource + ?Sized,
{
    let contents = source
        .read(&file.path)
        .await
        .map_err(|e| Error::file_system(&file.path, "read", e))?;

    let record = parse_record(&file.path, &contents)?;
    trace!(
        environment = %file.environment,
        keys = record.len(),
        "parsed config file"
    );
    Ok(record)
}

/// Read and decode every file concurrently
///
/// Fails on the first error; the remaining reads are dropped and no partial
/// mapping is returned.
pub async fn parse_config_files<S>(source: &S, files: &[ConfigFile]) -> Result<ConfigHash>
where
    S: ConfigSource + ?Sized,
{
    let records = try_join_all(files.iter().map(|file| parse_config_file(source, file)))
        .await
        .inspect_err(|e| warn!(error = %e, "failed to parse config files"))?;

    Ok(files
        .iter()
        .map(|file| file.environment.clone())
        .zip(records)
        .collect())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
