//! Application ports
//!
//! Contracts for infrastructure services the application layer depends on.

pub mod infrastructure;

pub use infrastructure::{CollectionEventStream, EventBusProvider, SharedEventBus};
