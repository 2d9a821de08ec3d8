//! API data models
//!
//! Request and response models for the capacity API.

use acd_domain::entities::{CapacitySnapshot, VolumeCapacity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error response for API operations
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ApiErrorResponse {
    fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    /// No snapshot has been collected yet
    pub fn no_data() -> Self {
        Self::new("No data available. Run collection first.", "NO_DATA")
    }

    /// A collection is already running
    pub fn conflict() -> Self {
        Self::new("Collection already in progress", "COLLECTION_IN_PROGRESS")
    }

    /// Creates an internal error response
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, "INTERNAL_ERROR")
    }
}

/// Response to a collection trigger
#[derive(Debug, Serialize, Deserialize)]
pub struct CollectResponse {
    /// Trigger outcome
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Trigger time
    pub timestamp: DateTime<Utc>,
}

impl CollectResponse {
    /// A collection was admitted and started
    pub fn started() -> Self {
        Self {
            status: "started".to_string(),
            message: "Capacity collection initiated".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// One page of volumes drawn from the stored snapshot
#[derive(Debug, Serialize, Deserialize)]
pub struct VolumePageResponse {
    /// Total matching volumes before pagination
    pub total: usize,
    /// Page offset
    pub offset: usize,
    /// Page limit, when one was requested
    pub limit: Option<usize>,
    /// Volume records in this page
    pub items: Vec<VolumeCapacity>,
}

/// System block of the landing-page summary
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarySystem {
    /// Total raw usable capacity
    pub total_usable_gb: f64,
    /// Capacity actually consumed
    pub used_gb: f64,
    /// Free capacity
    pub free_gb: f64,
    /// Utilization, rounded to two decimals
    pub utilization_percent: f64,
}

/// Per-level counts of the landing-page summary
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryCounts {
    /// Pools in the snapshot
    pub pools: usize,
    /// Groups in the snapshot
    pub groups: usize,
    /// Volumes in the snapshot
    pub volumes: usize,
}

/// Landing-page capacity summary
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Array identifier
    pub array_id: String,
    /// Collection timestamp of the snapshot
    pub collection_timestamp: DateTime<Utc>,
    /// Array-wide figures
    pub system: SummarySystem,
    /// Per-level counts
    pub counts: SummaryCounts,
}

impl SummaryResponse {
    /// Build the summary from a snapshot
    pub fn from_snapshot(snapshot: &CapacitySnapshot) -> Self {
        Self {
            array_id: snapshot.array_id.clone(),
            collection_timestamp: snapshot.collected_at,
            system: SummarySystem {
                total_usable_gb: snapshot.system.total_usable_gb,
                used_gb: snapshot.system.effective_used_gb,
                free_gb: snapshot.system.free_gb,
                utilization_percent: (snapshot.system.utilization_percent * 100.0).round() / 100.0,
            },
            counts: SummaryCounts {
                pools: snapshot.total_pools(),
                groups: snapshot.total_groups(),
                volumes: snapshot.total_volumes(),
            },
        }
    }
}

/// Capacity aggregated over one service-level tag
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceLevelBreakdown {
    /// Service level tag; untagged groups aggregate under "None"
    pub service_level: String,
    /// Number of groups carrying the tag
    pub count: usize,
    /// Summed capacity of those groups
    pub total_capacity_gb: f64,
    /// Summed volume count of those groups
    pub num_volumes: u64,
}

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status
    pub status: String,
    /// Current time
    pub timestamp: DateTime<Utc>,
    /// Whether a snapshot is available
    pub has_data: bool,
}
