//! # Array Capacity Dashboard - Application Layer
//!
//! Orchestration of capacity collection: the capacity collector that walks
//! the four array levels through the metrics client port, the collection
//! state machine that admits at most one collection at a time and owns the
//! current snapshot, and the collection service that ties both to the event
//! bus so observers see lifecycle transitions in real time.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

// Re-export core types for public API
pub use domain_services::CollectionStateMachine;
pub use use_cases::{CapacityCollector, CollectionService, CollectorLimits};
