//! # Array Capacity Dashboard - Infrastructure Layer
//!
//! Cross-cutting technical concerns: configuration loading, structured
//! logging bootstrap, the in-process event bus, and the REST client adapter
//! that speaks both upstream surfaces of the array management service.

pub mod client;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod events;
pub mod logging;

// Re-export core types for public API
pub use client::UnisphereRestClient;
pub use config::{AppConfig, ConfigLoader};
pub use events::{NullEventBus, TokioBroadcastEventBus};
