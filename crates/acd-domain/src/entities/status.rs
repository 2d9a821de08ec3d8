//! Observer-facing collection status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Process-wide collection status
///
/// One instance per running engine, mutated only by the collection state
/// machine and read freely by any number of concurrent observers. Starts
/// out as "never collected".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionStatus {
    /// Whether a collection is currently running
    pub in_progress: bool,
    /// Completion time of the last successful collection
    pub last_collection_time: Option<DateTime<Utc>>,
    /// Whether a snapshot is available
    pub has_data: bool,
    /// Terminal error of the last attempt, cleared on success
    pub last_error: Option<String>,
    /// Array targeted by the last (or running) collection
    pub array_id: Option<String>,
}

impl CollectionStatus {
    /// Status of an engine that has never collected
    pub fn never_collected() -> Self {
        Self {
            in_progress: false,
            last_collection_time: None,
            has_data: false,
            last_error: None,
            array_id: None,
        }
    }
}

impl Default for CollectionStatus {
    fn default() -> Self {
        Self::never_collected()
    }
}
