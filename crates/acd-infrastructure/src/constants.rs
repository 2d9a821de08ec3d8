//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "ACD";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "acd.toml";

/// Default configuration directory, relative to the working directory
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "ACD_LOG";
