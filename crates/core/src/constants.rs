/// Constants used throughout the confide codebase
// Config file discovery
pub const CONFIG_FILE_SUFFIX: &str = ".json";
pub const DEFAULT_ENVIRONMENT: &str = "default";

// Environment variable names
pub const CONFIDE_CONFIG_DIR_VAR: &str = "CONFIDE_CONFIG_DIR";
pub const CONFIDE_DEFAULT_ENV_VAR: &str = "CONFIDE_DEFAULT_ENV";
pub const CONFIDE_CACHE_VAR: &str = "CONFIDE_CACHE";
pub const CONFIDE_LOG_VAR: &str = "CONFIDE_LOG";

// Error messages callers may match on
pub const MISSING_CONFIG_DIR_MESSAGE: &str = "must specify a config directory";
pub const MISSING_ENVIRONMENT_MESSAGE: &str =
    "environment not specified and no default configured";
