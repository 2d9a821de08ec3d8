//! Capacity Collector Use Case
//!
//! Runs one full collection attempt across the four array levels through
//! the metrics client port and assembles a [`CapacitySnapshot`].
//!
//! ## Failure policy
//!
//! The levels degrade independently. The system summary is the anchor: if
//! it cannot be fetched the whole attempt is fatal and no snapshot is
//! produced. Every other level records a [`LevelFailure`] and yields to the
//! next level instead of aborting, because pool/group/volume endpoints are
//! markedly less reliable at scale than the summary and a single erroring
//! pool or slow volume page must not discard already-gathered higher-value
//! data. Per-pool and per-record failures are attributed to the individual
//! sub-resource; list-level failures empty the level.

use acd_domain::constants::{
    DEFAULT_PAGE_CONCURRENCY, DEFAULT_POOL_CONCURRENCY, DEFAULT_VOLUME_PAGE_SIZE,
};
use acd_domain::entities::{
    CapacitySnapshot, CollectionLevel, GroupCapacity, LevelFailure, PoolCapacity, SystemCapacity,
    VolumeCapacity,
};
use acd_domain::error::Result;
use acd_domain::ports::SharedMetricsClient;
use acd_domain::value_objects::RawVolumeRecord;
use chrono::{DateTime, Utc};
use futures::{StreamExt, stream};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Bounds for intra-collection fan-out
///
/// Upstream APIs are rate-sensitive, so per-pool fetches and volume pages
/// run under small worker limits rather than unbounded.
#[derive(Debug, Clone, Copy)]
pub struct CollectorLimits {
    /// Volume records requested per bulk page
    pub volume_page_size: usize,
    /// Concurrent per-pool metric fetches
    pub pool_concurrency: usize,
    /// Concurrent volume page fetches
    pub page_concurrency: usize,
}

impl Default for CollectorLimits {
    fn default() -> Self {
        Self {
            volume_page_size: DEFAULT_VOLUME_PAGE_SIZE,
            pool_concurrency: DEFAULT_POOL_CONCURRENCY,
            page_concurrency: DEFAULT_PAGE_CONCURRENCY,
        }
    }
}

/// Orchestrates one collection attempt per call
pub struct CapacityCollector {
    client: SharedMetricsClient,
    limits: CollectorLimits,
}

impl CapacityCollector {
    /// Create a collector over the given metrics client
    pub fn new(client: SharedMetricsClient, limits: CollectorLimits) -> Self {
        Self { client, limits }
    }

    /// Run one full collection attempt
    ///
    /// Returns the snapshot, or an error only when the system summary
    /// itself could not be collected. An otherwise-empty snapshot with
    /// level failures is a valid result.
    pub async fn collect(&self, array_id: &str) -> Result<CapacitySnapshot> {
        let collected_at = Utc::now();
        info!(array_id, "Starting capacity collection");

        // Level 1: system summary. Fatal on failure, including integrity
        // violations in the array-wide counters.
        let raw_system = self.client.fetch_system_summary(array_id).await?;
        let system = SystemCapacity::from_raw(array_id, collected_at, raw_system)?;
        debug!(
            utilization_percent = system.utilization_percent,
            "System capacity collected"
        );

        let mut failures = Vec::new();
        let pools = self.collect_pools(array_id, collected_at, &mut failures).await;
        let groups = self.collect_groups(array_id, collected_at, &mut failures).await;
        let volumes = self.collect_volumes(array_id, collected_at, &mut failures).await;

        info!(
            array_id,
            pools = pools.len(),
            groups = groups.len(),
            volumes = volumes.len(),
            level_failures = failures.len(),
            "Capacity collection completed"
        );

        Ok(CapacitySnapshot {
            array_id: array_id.to_string(),
            collected_at,
            system,
            pools,
            groups,
            volumes,
            level_failures: failures,
        })
    }

    /// Level 2: pool list, then per-pool counters with bounded fan-out
    async fn collect_pools(
        &self,
        array_id: &str,
        collected_at: DateTime<Utc>,
        failures: &mut Vec<LevelFailure>,
    ) -> Vec<PoolCapacity> {
        let pool_ids = match self.client.fetch_pool_ids(array_id).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "Pool list fetch failed, skipping pool level");
                failures.push(LevelFailure::new(
                    CollectionLevel::Pool,
                    format!("pool list fetch failed: {e}"),
                ));
                return Vec::new();
            }
        };
        debug!(count = pool_ids.len(), "Fetching per-pool metrics");

        let mut outcomes: Vec<_> = stream::iter(pool_ids)
            .map(|pool_id| {
                let client = Arc::clone(&self.client);
                let array_id = array_id.to_string();
                async move {
                    let outcome = client.fetch_pool_metrics(&array_id, &pool_id).await;
                    (pool_id, outcome)
                }
            })
            .buffer_unordered(self.limits.pool_concurrency.max(1))
            .collect()
            .await;
        // Deterministic snapshots for a given input set
        outcomes.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut pools = Vec::new();
        for (pool_id, outcome) in outcomes {
            let built = outcome
                .and_then(|raw| PoolCapacity::from_raw(array_id, &pool_id, collected_at, raw));
            match built {
                Ok(pool) => pools.push(pool),
                Err(e) => {
                    warn!(pool_id = %pool_id, error = %e, "Skipping pool");
                    failures.push(LevelFailure::new(
                        CollectionLevel::Pool,
                        format!("pool '{pool_id}': {e}"),
                    ));
                }
            }
        }
        pools
    }

    /// Level 3: one bulk call for all groups
    async fn collect_groups(
        &self,
        array_id: &str,
        collected_at: DateTime<Utc>,
        failures: &mut Vec<LevelFailure>,
    ) -> Vec<GroupCapacity> {
        let records = match self.client.fetch_groups(array_id).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Group fetch failed, skipping group level");
                failures.push(LevelFailure::new(
                    CollectionLevel::Group,
                    format!("group fetch failed: {e}"),
                ));
                return Vec::new();
            }
        };

        let mut groups = Vec::new();
        for record in records {
            let group_id = record.group_id.clone();
            match GroupCapacity::from_raw(array_id, collected_at, record) {
                Ok(group) => groups.push(group),
                Err(e) => {
                    warn!(group_id = %group_id, error = %e, "Dropping group record");
                    failures.push(LevelFailure::new(CollectionLevel::Group, e.to_string()));
                }
            }
        }
        groups.sort_by(|a, b| a.group_id.cmp(&b.group_id));
        groups
    }

    /// Level 4: page through the bulk volume endpoint
    ///
    /// The first page establishes the upstream total; remaining pages are
    /// fetched with bounded fan-out. A failed page aborts further paging
    /// for this level only, keeping the volumes gathered up to that point
    /// and recording how many were collected.
    async fn collect_volumes(
        &self,
        array_id: &str,
        collected_at: DateTime<Utc>,
        failures: &mut Vec<LevelFailure>,
    ) -> Vec<VolumeCapacity> {
        let page_size = self.limits.volume_page_size.max(1);

        let first = match self.client.fetch_volumes(array_id, page_size, 0).await {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, "First volume page failed, skipping volume level");
                failures.push(LevelFailure::new(
                    CollectionLevel::Volume,
                    format!("volume page at offset 0 failed: {e}"),
                ));
                return Vec::new();
            }
        };

        let total = first.total;
        debug!(total, "Paging volumes");
        let mut records = first.records;

        // A short first page means end of data regardless of the reported
        // total; otherwise fetch the remaining offsets.
        if records.len() == page_size && total > page_size {
            let offsets: Vec<usize> = (page_size..total).step_by(page_size).collect();
            let mut pages: Vec<_> = stream::iter(offsets)
                .map(|offset| {
                    let client = Arc::clone(&self.client);
                    let array_id = array_id.to_string();
                    async move {
                        let outcome = client.fetch_volumes(&array_id, page_size, offset).await;
                        (offset, outcome)
                    }
                })
                .buffer_unordered(self.limits.page_concurrency.max(1))
                .collect()
                .await;
            pages.sort_by_key(|(offset, _)| *offset);

            for (offset, outcome) in pages {
                match outcome {
                    Ok(page) => records.extend(page.records),
                    Err(e) => {
                        warn!(offset, error = %e, "Volume page failed, aborting volume level");
                        failures.push(LevelFailure::new(
                            CollectionLevel::Volume,
                            format!(
                                "volume page at offset {offset} failed after {} volumes: {e}",
                                records.len()
                            ),
                        ));
                        break;
                    }
                }
            }
        }

        self.build_volumes(array_id, collected_at, records, failures)
    }

    fn build_volumes(
        &self,
        array_id: &str,
        collected_at: DateTime<Utc>,
        records: Vec<RawVolumeRecord>,
        failures: &mut Vec<LevelFailure>,
    ) -> Vec<VolumeCapacity> {
        let mut volumes = Vec::with_capacity(records.len());
        for record in records {
            let volume_id = record.volume_id.clone();
            match VolumeCapacity::from_raw(array_id, collected_at, record) {
                Ok(volume) => volumes.push(volume),
                Err(e) => {
                    warn!(volume_id = %volume_id, error = %e, "Dropping volume record");
                    failures.push(LevelFailure::new(CollectionLevel::Volume, e.to_string()));
                }
            }
        }
        volumes.sort_by(|a, b| a.volume_id.cmp(&b.volume_id));
        volumes
    }
}
