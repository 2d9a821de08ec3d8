//! Configuration management
//!
//! Typed configuration sections plus a figment-based loader merging
//! defaults, a TOML file, and `ACD_`-prefixed environment variables.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CollectorConfig, LoggingConfig, ServerConfig, UnisphereConfig};
