//! Capacity entities for the four array levels
//!
//! Every entity is tagged with the owning array identifier and the
//! collection timestamp, and is immutable once constructed. Derived fields
//! are computed exactly once, in the `from_raw` constructors, from the raw
//! counters the adapter returned; they are never independently mutated.
//!
//! ## Business Rules
//!
//! - All capacity values are non-negative. A negative value from upstream is
//!   a [`Error::DataIntegrity`] and the record is rejected, not repaired.
//! - `subscription_percent` may exceed 100 under thin provisioning and is
//!   never clamped.
//! - A volume may belong to zero or many groups; membership is by group
//!   identifier, not object reference.

use crate::error::{Error, Result};
use crate::metrics;
use crate::value_objects::{RawGroupRecord, RawPoolCounters, RawSystemCounters, RawVolumeRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Array-wide capacity totals with derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemCapacity {
    /// Owning array identifier
    pub array_id: String,
    /// Collection timestamp
    pub timestamp: DateTime<Utc>,
    /// Capacity actually consumed
    pub effective_used_gb: f64,
    /// Maximum available effective capacity
    pub max_effective_gb: f64,
    /// Total allocated capacity
    pub subscribed_gb: f64,
    /// Total raw usable capacity
    pub total_usable_gb: f64,
    /// Derived: `total_usable_gb - effective_used_gb`
    pub free_gb: f64,
    /// Derived: `effective_used_gb / total_usable_gb * 100`
    pub utilization_percent: f64,
}

impl SystemCapacity {
    /// Build from raw counters, computing the derived fields
    pub fn from_raw(
        array_id: &str,
        timestamp: DateTime<Utc>,
        raw: RawSystemCounters,
    ) -> Result<Self> {
        ensure_non_negative("system", array_id, &[
            ("effective_used_gb", raw.effective_used_gb),
            ("max_effective_gb", raw.max_effective_gb),
            ("subscribed_gb", raw.subscribed_gb),
            ("total_usable_gb", raw.total_usable_gb),
        ])?;

        Ok(Self {
            array_id: array_id.to_string(),
            timestamp,
            effective_used_gb: raw.effective_used_gb,
            max_effective_gb: raw.max_effective_gb,
            subscribed_gb: raw.subscribed_gb,
            total_usable_gb: raw.total_usable_gb,
            free_gb: metrics::free_gb(raw.total_usable_gb, raw.effective_used_gb),
            utilization_percent: metrics::utilization_percent(
                raw.effective_used_gb,
                raw.total_usable_gb,
            ),
        })
    }
}

/// Per-pool capacity with derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolCapacity {
    /// Owning array identifier
    pub array_id: String,
    /// Pool identifier
    pub pool_id: String,
    /// Collection timestamp
    pub timestamp: DateTime<Utc>,
    /// Capacity consumed in the pool
    pub used_gb: f64,
    /// Total allocated against the pool
    pub subscribed_gb: f64,
    /// Total capacity managed by the pool
    pub total_managed_gb: f64,
    /// Derived: `total_managed_gb - used_gb`
    pub free_gb: f64,
    /// Derived: `used_gb / total_managed_gb * 100`
    pub utilization_percent: f64,
    /// Derived: `subscribed_gb / total_managed_gb * 100`, unclamped
    pub subscription_percent: f64,
}

impl PoolCapacity {
    /// Build from raw counters, computing the derived fields
    pub fn from_raw(
        array_id: &str,
        pool_id: &str,
        timestamp: DateTime<Utc>,
        raw: RawPoolCounters,
    ) -> Result<Self> {
        ensure_non_negative("pool", pool_id, &[
            ("used_gb", raw.used_gb),
            ("subscribed_gb", raw.subscribed_gb),
            ("total_managed_gb", raw.total_managed_gb),
        ])?;

        Ok(Self {
            array_id: array_id.to_string(),
            pool_id: pool_id.to_string(),
            timestamp,
            used_gb: raw.used_gb,
            subscribed_gb: raw.subscribed_gb,
            total_managed_gb: raw.total_managed_gb,
            free_gb: metrics::free_gb(raw.total_managed_gb, raw.used_gb),
            utilization_percent: metrics::utilization_percent(raw.used_gb, raw.total_managed_gb),
            subscription_percent: metrics::subscription_percent(
                raw.subscribed_gb,
                raw.total_managed_gb,
            ),
        })
    }
}

/// Per-group capacity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCapacity {
    /// Owning array identifier
    pub array_id: String,
    /// Group identifier
    pub group_id: String,
    /// Collection timestamp
    pub timestamp: DateTime<Utc>,
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

impl GroupCapacity {
    /// Build from a raw bulk record
    pub fn from_raw(array_id: &str, timestamp: DateTime<Utc>, raw: RawGroupRecord) -> Result<Self> {
        ensure_non_negative("group", &raw.group_id, &[("capacity_gb", raw.capacity_gb)])?;

        Ok(Self {
            array_id: array_id.to_string(),
            group_id: raw.group_id,
            timestamp,
            capacity_gb: raw.capacity_gb,
            num_volumes: raw.num_volumes,
            service_level: raw.service_level,
            pool_name: raw.pool_name,
            compression_enabled: raw.compression_enabled,
        })
    }
}

/// Per-volume capacity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeCapacity {
    /// Owning array identifier
    pub array_id: String,
    /// Volume device identifier
    pub volume_id: String,
    /// Human-readable volume name, when set
    pub volume_name: Option<String>,
    /// Collection timestamp
    pub timestamp: DateTime<Utc>,
    /// Volume capacity
    pub capacity_gb: f64,
    /// Percentage of allocated space actually written
    pub allocated_percent: f64,
    /// Owning groups, by identifier (zero or many)
    pub group_ids: Vec<String>,
    /// World Wide Name, when reported
    pub wwn: Option<String>,
    /// Emulation type, when reported
    pub emulation_type: Option<String>,
}

impl VolumeCapacity {
    /// Build from a raw bulk record
    ///
    /// An `allocated_percent` outside `[0, 100]` is upstream reporting noise
    /// rather than a capacity violation and is normalized to 0.0.
    pub fn from_raw(
        array_id: &str,
        timestamp: DateTime<Utc>,
        raw: RawVolumeRecord,
    ) -> Result<Self> {
        ensure_non_negative("volume", &raw.volume_id, &[("capacity_gb", raw.capacity_gb)])?;

        let allocated_percent = if (0.0..=100.0).contains(&raw.allocated_percent) {
            raw.allocated_percent
        } else {
            0.0
        };

        Ok(Self {
            array_id: array_id.to_string(),
            volume_id: raw.volume_id,
            volume_name: raw.volume_name,
            timestamp,
            capacity_gb: raw.capacity_gb,
            allocated_percent,
            group_ids: raw.group_ids,
            wwn: raw.wwn,
            emulation_type: raw.emulation_type,
        })
    }
}

/// Collection level a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionLevel {
    /// Array-wide summary
    System,
    /// Storage resource pools
    Pool,
    /// Storage groups
    Group,
    /// Volumes
    Volume,
}

impl std::fmt::Display for CollectionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::System => "system",
            Self::Pool => "pool",
            Self::Group => "group",
            Self::Volume => "volume",
        };
        f.write_str(name)
    }
}

/// A recorded, non-fatal failure to collect one sub-resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFailure {
    /// Level the failure is attributed to
    pub level: CollectionLevel,
    /// Human-readable cause
    pub message: String,
}

impl LevelFailure {
    /// Create a level failure entry
    pub fn new(level: CollectionLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Complete capacity snapshot across all four levels
///
/// The aggregate root produced by one collection attempt. Sequences are
/// sorted by identifier so a given input set always yields the same
/// snapshot. Level failures record sub-resources that could not be
/// collected without invalidating the rest of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitySnapshot {
    /// Owning array identifier
    pub array_id: String,
    /// Time the collection attempt started
    pub collected_at: DateTime<Utc>,
    /// Array-wide totals
    pub system: SystemCapacity,
    /// Per-pool records, sorted by pool id
    pub pools: Vec<PoolCapacity>,
    /// Per-group records, sorted by group id
    pub groups: Vec<GroupCapacity>,
    /// Per-volume records, sorted by volume id
    pub volumes: Vec<VolumeCapacity>,
    /// Non-fatal failures recorded during collection
    pub level_failures: Vec<LevelFailure>,
}

impl CapacitySnapshot {
    /// Number of pools in the snapshot
    pub fn total_pools(&self) -> usize {
        self.pools.len()
    }

    /// Number of groups in the snapshot
    pub fn total_groups(&self) -> usize {
        self.groups.len()
    }

    /// Number of volumes in the snapshot
    pub fn total_volumes(&self) -> usize {
        self.volumes.len()
    }
}

fn ensure_non_negative(kind: &str, id: &str, fields: &[(&str, f64)]) -> Result<()> {
    for (name, value) in fields {
        if *value < 0.0 {
            return Err(Error::data_integrity(format!(
                "{kind} '{id}' reported negative {name}: {value}"
            )));
        }
    }
    Ok(())
}
