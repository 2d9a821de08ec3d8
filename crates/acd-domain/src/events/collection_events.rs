//! Collection Lifecycle Events
//!
//! Events the engine publishes on collection state transitions. Connected
//! observers receive them as JSON documents discriminated by a `type`
//! field; delivery is best-effort and nothing is buffered or replayed for
//! reconnecting observers, who resynchronize with a status read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle event for one collection attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CollectionEvent {
    /// A collection was admitted and is now running
    CollectionStarted {
        /// Array being collected
        array_id: String,
        /// Admission time
        timestamp: DateTime<Utc>,
    },
    /// A collection finished and its snapshot is now current
    CollectionCompleted {
        /// Array that was collected
        array_id: String,
        /// Completion time
        timestamp: DateTime<Utc>,
        /// Pools in the new snapshot
        total_pools: usize,
        /// Groups in the new snapshot
        total_groups: usize,
        /// Volumes in the new snapshot
        total_volumes: usize,
        /// Array-wide utilization of the new snapshot
        system_utilization_percent: f64,
    },
    /// A collection ended in a fatal error; any prior snapshot remains
    CollectionError {
        /// Human-readable cause
        error: String,
        /// Failure time
        timestamp: DateTime<Utc>,
    },
}

impl CollectionEvent {
    /// Event name used as the SSE event type header
    pub fn name(&self) -> &'static str {
        match self {
            Self::CollectionStarted { .. } => "collection_started",
            Self::CollectionCompleted { .. } => "collection_completed",
            Self::CollectionError { .. } => "collection_error",
        }
    }
}
