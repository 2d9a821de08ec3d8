//! Wire formats of the two Unisphere REST surfaces
//!
//! Field names follow the upstream payloads verbatim; the client maps these
//! into the domain's raw value objects and never leaks them further.

use serde::{Deserialize, Serialize};

// ============================================================================
// Metrics-style (legacy) surface
// ============================================================================

/// Body of a metrics query against the legacy performance endpoints
#[derive(Debug, Serialize)]
pub(crate) struct MetricsQuery<'a> {
    #[serde(rename = "symmetrixId")]
    pub symmetrix_id: &'a str,
    #[serde(rename = "dataFormat")]
    pub data_format: &'a str,
    pub metrics: &'a [&'a str],
    #[serde(rename = "storageResourcePoolId", skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<&'a str>,
}

impl<'a> MetricsQuery<'a> {
    pub fn array(symmetrix_id: &'a str, metrics: &'a [&'a str]) -> Self {
        Self {
            symmetrix_id,
            data_format: "Average",
            metrics,
            pool_id: None,
        }
    }

    pub fn pool(symmetrix_id: &'a str, pool_id: &'a str, metrics: &'a [&'a str]) -> Self {
        Self {
            symmetrix_id,
            data_format: "Average",
            metrics,
            pool_id: Some(pool_id),
        }
    }
}

/// Envelope around time-series metric rows
#[derive(Debug, Deserialize)]
pub(crate) struct MetricsEnvelope<T> {
    #[serde(rename = "resultList")]
    pub result_list: MetricsResultList<T>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct MetricsResultList<T> {
    #[serde(default)]
    pub result: Vec<T>,
}

/// One array-level metrics row
#[derive(Debug, Deserialize)]
pub(crate) struct SystemMetricsRow {
    #[serde(rename = "EffectiveUsedCapacity")]
    pub effective_used: f64,
    #[serde(rename = "MaxEffectiveCapacity")]
    pub max_effective: f64,
    #[serde(rename = "SubscribedCapacity")]
    pub subscribed: f64,
    #[serde(rename = "TotalUsableCapacity")]
    pub total_usable: f64,
}

/// One pool-level metrics row
#[derive(Debug, Deserialize)]
pub(crate) struct PoolMetricsRow {
    #[serde(rename = "UsedCapacity")]
    pub used: f64,
    #[serde(rename = "SubscribedCapacity")]
    pub subscribed: f64,
    #[serde(rename = "TotalManagedSpace")]
    pub total_managed: f64,
}

/// Pool key listing
#[derive(Debug, Deserialize)]
pub(crate) struct PoolKeysResponse {
    #[serde(rename = "storageResourcePoolInfo", default)]
    pub pools: Vec<PoolKey>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PoolKey {
    #[serde(rename = "storageResourcePoolId")]
    pub id: String,
}

// ============================================================================
// Bulk-object (enhanced) surface
// ============================================================================

/// All storage groups in one response
#[derive(Debug, Deserialize)]
pub(crate) struct StorageGroupsResponse {
    #[serde(rename = "storage_groups", default)]
    pub storage_groups: Vec<StorageGroupWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StorageGroupWire {
    #[serde(rename = "storageGroupId")]
    pub id: String,
    pub cap_gb: f64,
    #[serde(default)]
    pub num_of_vols: u64,
    #[serde(default)]
    pub slo: Option<String>,
    #[serde(default)]
    pub srp: Option<String>,
    #[serde(default)]
    pub compression: bool,
}

/// One page of volumes plus the array-wide count
#[derive(Debug, Deserialize)]
pub(crate) struct VolumesResponse {
    pub count: usize,
    #[serde(default)]
    pub volumes: Vec<VolumeWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VolumeWire {
    #[serde(rename = "volumeId")]
    pub id: String,
    #[serde(default)]
    pub volume_identifier: Option<String>,
    pub cap_gb: f64,
    #[serde(default)]
    pub allocated_percent: f64,
    #[serde(rename = "storageGroupId", default)]
    pub storage_group_ids: Vec<String>,
    #[serde(default)]
    pub wwn: Option<String>,
    #[serde(rename = "type", default)]
    pub emulation: Option<String>,
}
