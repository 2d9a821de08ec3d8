//! Metrics Client Port
//!
//! The contract behind which the two upstream request surfaces are hidden.
//! The management service exposes a metrics-style surface (system summary,
//! pool keys and per-pool counters, list-then-detail) and a bulk-object
//! surface (all groups in one response, volumes with offset/limit
//! pagination). Callers never learn which surface served a given level;
//! they only see these five operations.
//!
//! Every operation is stateless, idempotent, and side-effect-free toward
//! upstream state, so a caller may safely retry. Pagination parameters for
//! the volume fetch are exposed directly: the capacity collector decides
//! whether to page fully or partially.

use crate::error::Result;
use crate::value_objects::{RawGroupRecord, RawPoolCounters, RawSystemCounters, VolumePage};
use async_trait::async_trait;
use std::sync::Arc;

/// Port for fetching raw capacity counters from the array management service
#[async_trait]
pub trait ArrayMetricsClient: Send + Sync {
    /// Fetch the array-wide capacity counters
    ///
    /// Fails with `UpstreamUnavailable` on network errors, `UpstreamAuth`
    /// on credential rejection, and `UpstreamProtocol` when the response is
    /// malformed or missing fields.
    async fn fetch_system_summary(&self, array_id: &str) -> Result<RawSystemCounters>;

    /// List the identifiers of all storage resource pools on the array
    async fn fetch_pool_ids(&self, array_id: &str) -> Result<Vec<String>>;

    /// Fetch the capacity counters of a single pool
    ///
    /// Called once per pool; a failure is attributable to that pool alone.
    async fn fetch_pool_metrics(&self, array_id: &str, pool_id: &str) -> Result<RawPoolCounters>;

    /// Fetch every group record in one bulk response
    async fn fetch_groups(&self, array_id: &str) -> Result<Vec<RawGroupRecord>>;

    /// Fetch one page of volume records
    ///
    /// Returns the page plus the total volume count upstream reports.
    /// A request beyond the total yields an empty page.
    async fn fetch_volumes(&self, array_id: &str, limit: usize, offset: usize)
    -> Result<VolumePage>;
}

/// Shared metrics client handle
pub type SharedMetricsClient = Arc<dyn ArrayMetricsClient>;
