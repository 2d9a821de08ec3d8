//! # Array Capacity Dashboard - Domain Layer
//!
//! Core business types for hierarchical storage-array capacity metrics.
//! This crate is free of I/O: it defines the capacity entities collected at
//! the four array levels (system, pool, group, volume), the pure derived-
//! metrics calculator, the collection lifecycle events, and the port trait
//! the upstream metrics client adapter implements.
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CapacitySnapshot`] | Aggregate result of one collection attempt |
//! | [`CollectionStatus`] | Process-wide collection state for observers |
//! | [`CollectionEvent`] | Lifecycle event pushed to subscribers |
//! | [`ArrayMetricsClient`](ports::ArrayMetricsClient) | Upstream adapter port |

pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod value_objects;

// Re-export core types for public API
pub use entities::{
    CapacitySnapshot, CollectionLevel, CollectionStatus, GroupCapacity, LevelFailure,
    PoolCapacity, SystemCapacity, VolumeCapacity,
};
pub use error::{Error, Result};
pub use events::CollectionEvent;
pub use value_objects::{
    RawGroupRecord, RawPoolCounters, RawSystemCounters, RawVolumeRecord, VolumePage,
};
