//! Shared test doubles for the application test suite

use acd_application::ports::infrastructure::{CollectionEventStream, EventBusProvider};
use acd_domain::error::{Error, Result};
use acd_domain::events::CollectionEvent;
use acd_domain::ports::ArrayMetricsClient;
use acd_domain::value_objects::{
    RawGroupRecord, RawPoolCounters, RawSystemCounters, RawVolumeRecord, VolumePage,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

/// Configurable in-memory metrics client
///
/// Serves fixture data and fails exactly where a test tells it to, so the
/// graduated failure policy can be exercised without any network.
pub struct MockMetricsClient {
    pub system: RawSystemCounters,
    pub fail_system: bool,
    pub pools: Vec<(String, RawPoolCounters)>,
    pub fail_pool_list: bool,
    pub failing_pools: HashSet<String>,
    pub groups: Vec<RawGroupRecord>,
    pub fail_groups: bool,
    pub volumes: Vec<RawVolumeRecord>,
    pub failing_page_offsets: HashSet<usize>,
    /// Artificial latency before the system fetch, for in-progress windows
    pub system_delay: Option<Duration>,
}

impl MockMetricsClient {
    /// A fully healthy array: 3 pools, 2 groups, `volume_count` volumes
    pub fn healthy(volume_count: usize) -> Self {
        let pool = RawPoolCounters {
            used_gb: 400.0,
            subscribed_gb: 1500.0,
            total_managed_gb: 1000.0,
        };
        Self {
            system: RawSystemCounters {
                effective_used_gb: 650.0,
                max_effective_gb: 1200.0,
                subscribed_gb: 900.0,
                total_usable_gb: 1000.0,
            },
            fail_system: false,
            // Deliberately unsorted: the collector must sort by identifier
            pools: vec![
                ("SRP_2".to_string(), pool),
                ("SRP_1".to_string(), pool),
                ("SRP_3".to_string(), pool),
            ],
            fail_pool_list: false,
            failing_pools: HashSet::new(),
            groups: vec![
                RawGroupRecord {
                    group_id: "web_sg".to_string(),
                    capacity_gb: 256.0,
                    num_volumes: 4,
                    service_level: Some("Silver".to_string()),
                    pool_name: Some("SRP_2".to_string()),
                    compression_enabled: false,
                },
                RawGroupRecord {
                    group_id: "db_sg".to_string(),
                    capacity_gb: 512.0,
                    num_volumes: 8,
                    service_level: Some("Diamond".to_string()),
                    pool_name: Some("SRP_1".to_string()),
                    compression_enabled: true,
                },
            ],
            fail_groups: false,
            volumes: (0..volume_count).map(make_volume).collect(),
            failing_page_offsets: HashSet::new(),
            system_delay: None,
        }
    }
}

/// Build a volume fixture with a zero-padded, sort-stable identifier
pub fn make_volume(index: usize) -> RawVolumeRecord {
    RawVolumeRecord {
        volume_id: format!("{index:05}"),
        volume_name: Some(format!("VOL_{index}")),
        capacity_gb: 100.0,
        allocated_percent: 50.0,
        group_ids: vec![if index % 2 == 0 { "db_sg" } else { "web_sg" }.to_string()],
        wwn: None,
        emulation_type: Some("FBA".to_string()),
    }
}

#[async_trait]
impl ArrayMetricsClient for MockMetricsClient {
    async fn fetch_system_summary(&self, _array_id: &str) -> Result<RawSystemCounters> {
        if let Some(delay) = self.system_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_system {
            return Err(Error::upstream_unavailable("connect timeout"));
        }
        Ok(self.system)
    }

    async fn fetch_pool_ids(&self, _array_id: &str) -> Result<Vec<String>> {
        if self.fail_pool_list {
            return Err(Error::upstream_unavailable("pool keys endpoint down"));
        }
        Ok(self.pools.iter().map(|(id, _)| id.clone()).collect())
    }

    async fn fetch_pool_metrics(&self, _array_id: &str, pool_id: &str) -> Result<RawPoolCounters> {
        if self.failing_pools.contains(pool_id) {
            return Err(Error::upstream_unavailable(format!(
                "pool '{pool_id}' metrics endpoint down"
            )));
        }
        self.pools
            .iter()
            .find(|(id, _)| id == pool_id)
            .map(|(_, counters)| *counters)
            .ok_or_else(|| Error::not_found(format!("pool '{pool_id}'")))
    }

    async fn fetch_groups(&self, _array_id: &str) -> Result<Vec<RawGroupRecord>> {
        if self.fail_groups {
            return Err(Error::upstream_protocol("unexpected group payload shape"));
        }
        Ok(self.groups.clone())
    }

    async fn fetch_volumes(
        &self,
        _array_id: &str,
        limit: usize,
        offset: usize,
    ) -> Result<VolumePage> {
        if self.failing_page_offsets.contains(&offset) {
            return Err(Error::upstream_unavailable(format!(
                "volume page at offset {offset} timed out"
            )));
        }
        let total = self.volumes.len();
        let end = (offset + limit).min(total);
        let records = if offset < total {
            self.volumes[offset..end].to_vec()
        } else {
            Vec::new()
        };
        Ok(VolumePage { records, total })
    }
}

/// Event bus double that records every published event
#[derive(Default)]
pub struct RecordingEventBus {
    events: Mutex<Vec<CollectionEvent>>,
}

impl RecordingEventBus {
    pub fn published(&self) -> Vec<CollectionEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventBusProvider for RecordingEventBus {
    async fn publish_event(&self, event: CollectionEvent) -> Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<CollectionEventStream> {
        Ok(Box::pin(futures::stream::empty()))
    }

    fn has_subscribers(&self) -> bool {
        false
    }
}
