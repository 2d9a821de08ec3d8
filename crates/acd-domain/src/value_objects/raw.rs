//! Raw capacity counters
//!
//! Plain numeric fields exactly as the upstream surfaces report them, in
//! gigabytes. No derived metrics, no validation: that happens when the
//! corresponding entity is constructed.

use serde::{Deserialize, Serialize};

/// Array-wide counters from the metrics-style surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSystemCounters {
    /// Capacity actually consumed
    pub effective_used_gb: f64,
    /// Maximum available effective capacity
    pub max_effective_gb: f64,
    /// Total allocated capacity (may exceed physical under thin provisioning)
    pub subscribed_gb: f64,
    /// Total raw usable capacity
    pub total_usable_gb: f64,
}

/// Per-pool counters from the metrics-style surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPoolCounters {
    /// Capacity consumed in the pool
    pub used_gb: f64,
    /// Total allocated against the pool
    pub subscribed_gb: f64,
    /// Total capacity managed by the pool
    pub total_managed_gb: f64,
}

/// One group record from the bulk-object surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGroupRecord {
    /// Group identifier
    pub group_id: String,
    /// Capacity allocated to the group
    pub capacity_gb: f64,
    /// Number of volumes in the group
    pub num_volumes: u64,
    /// Service level tag, when assigned
    pub service_level: Option<String>,
    /// Owning pool, referenced by identifier
    pub pool_name: Option<String>,
    /// Whether compression is enabled for the group
    pub compression_enabled: bool,
}

/// One volume record from the bulk-object surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVolumeRecord {
    /// Volume device identifier
    pub volume_id: String,
    /// Human-readable volume name, when set
    pub volume_name: Option<String>,
    /// Volume capacity
    pub capacity_gb: f64,
    /// Percentage of allocated space actually written
    pub allocated_percent: f64,
    /// Owning groups, referenced by identifier (zero or many)
    pub group_ids: Vec<String>,
    /// World Wide Name, when reported
    pub wwn: Option<String>,
    /// Emulation type, when reported
    pub emulation_type: Option<String>,
}

/// One page of volume records plus the upstream total count
///
/// The total is reported by the bulk surface on every page and drives the
/// collector's end-of-data detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePage {
    /// Records in this page
    pub records: Vec<RawVolumeRecord>,
    /// Total number of volumes upstream reports for the array
    pub total: usize,
}
