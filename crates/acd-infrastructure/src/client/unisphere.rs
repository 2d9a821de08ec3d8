//! Unisphere REST client
//!
//! Implements the `ArrayMetricsClient` port against a Unisphere management
//! service. Two request surfaces are in play and are deliberately kept
//! behind the one port rather than unified upstream:
//!
//! - the legacy surface (`/univmax/restapi/...`) serves the system summary
//!   and the pool level with a list-then-detail pattern;
//! - the enhanced surface (`/univmax/rest/v1/...`) serves true bulk reads:
//!   all groups in one response, volumes with offset/limit pagination.
//!
//! Every call is stateless toward upstream, carries the configured timeout,
//! and maps failures into the domain taxonomy: connect/timeout errors to
//! `UpstreamUnavailable`, credential rejection to `UpstreamAuth`, and
//! malformed payloads to `UpstreamProtocol`.

use crate::client::wire::{
    MetricsEnvelope, MetricsQuery, PoolKeysResponse, PoolMetricsRow, StorageGroupsResponse,
    SystemMetricsRow, VolumesResponse,
};
use crate::config::UnisphereConfig;
use acd_domain::error::{Error, Result};
use acd_domain::ports::ArrayMetricsClient;
use acd_domain::value_objects::{
    RawGroupRecord, RawPoolCounters, RawSystemCounters, RawVolumeRecord, VolumePage,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Metric names requested for the array summary
const SYSTEM_METRICS: &[&str] = &[
    "EffectiveUsedCapacity",
    "MaxEffectiveCapacity",
    "SubscribedCapacity",
    "TotalUsableCapacity",
];

/// Metric names requested per pool
const POOL_METRICS: &[&str] = &["UsedCapacity", "SubscribedCapacity", "TotalManagedSpace"];

/// REST client for the Unisphere management service
pub struct UnisphereRestClient {
    http: reqwest::Client,
    legacy_base: String,
    enhanced_base: String,
    username: String,
    password: String,
}

impl UnisphereRestClient {
    /// Build a client from connection configuration
    pub fn new(config: &UnisphereConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to build HTTP client", e))?;

        let root = format!("https://{}:{}", config.host, config.port);
        Ok(Self {
            http,
            legacy_base: format!("{root}/univmax/restapi"),
            enhanced_base: format!("{root}/univmax/rest/v1"),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String, context: &str) -> Result<T> {
        debug!(url = %url, "GET {}", context);
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| Self::map_send_error(context, e))?;
        Self::decode(response, context).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
        context: &str,
    ) -> Result<T> {
        debug!(url = %url, "POST {}", context);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await
            .map_err(|e| Self::map_send_error(context, e))?;
        Self::decode(response, context).await
    }

    fn map_send_error(context: &str, error: reqwest::Error) -> Error {
        let kind = if error.is_timeout() {
            "request timed out"
        } else if error.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        Error::upstream_unavailable_with_source(format!("{context}: {kind}"), error)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, context: &str) -> Result<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::upstream_auth(format!(
                "{context}: management service rejected credentials ({status})"
            )));
        }
        if status.is_server_error() {
            return Err(Error::upstream_unavailable(format!(
                "{context}: management service returned {status}"
            )));
        }
        if !status.is_success() {
            return Err(Error::upstream_protocol(format!(
                "{context}: unexpected status {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::upstream_protocol(format!("{context}: malformed response: {e}")))
    }

    /// The performance endpoints return time-series rows; the first row is
    /// the latest sample.
    fn latest_row<T>(envelope: MetricsEnvelope<T>, context: &str) -> Result<T> {
        envelope
            .result_list
            .result
            .into_iter()
            .next()
            .ok_or_else(|| Error::upstream_protocol(format!("{context}: empty metrics result")))
    }
}

#[async_trait]
impl ArrayMetricsClient for UnisphereRestClient {
    async fn fetch_system_summary(&self, array_id: &str) -> Result<RawSystemCounters> {
        let context = "system summary";
        let query = MetricsQuery::array(array_id, SYSTEM_METRICS);
        let envelope: MetricsEnvelope<SystemMetricsRow> = self
            .post_json(
                format!("{}/performance/Array/metrics", self.legacy_base),
                &query,
                context,
            )
            .await?;

        let row = Self::latest_row(envelope, context)?;
        Ok(RawSystemCounters {
            effective_used_gb: row.effective_used,
            max_effective_gb: row.max_effective,
            subscribed_gb: row.subscribed,
            total_usable_gb: row.total_usable,
        })
    }

    async fn fetch_pool_ids(&self, array_id: &str) -> Result<Vec<String>> {
        let response: PoolKeysResponse = self
            .get_json(
                format!(
                    "{}/performance/StorageResourcePool/keys?symmetrixId={array_id}",
                    self.legacy_base
                ),
                "pool keys",
            )
            .await?;

        Ok(response.pools.into_iter().map(|key| key.id).collect())
    }

    async fn fetch_pool_metrics(&self, array_id: &str, pool_id: &str) -> Result<RawPoolCounters> {
        let context = "pool metrics";
        let query = MetricsQuery::pool(array_id, pool_id, POOL_METRICS);
        let envelope: MetricsEnvelope<PoolMetricsRow> = self
            .post_json(
                format!(
                    "{}/performance/StorageResourcePool/metrics",
                    self.legacy_base
                ),
                &query,
                context,
            )
            .await?;

        let row = Self::latest_row(envelope, context)?;
        Ok(RawPoolCounters {
            used_gb: row.used,
            subscribed_gb: row.subscribed,
            total_managed_gb: row.total_managed,
        })
    }

    async fn fetch_groups(&self, array_id: &str) -> Result<Vec<RawGroupRecord>> {
        let response: StorageGroupsResponse = self
            .get_json(
                format!("{}/systems/{array_id}/storage-groups", self.enhanced_base),
                "storage groups",
            )
            .await?;

        Ok(response
            .storage_groups
            .into_iter()
            .map(|group| RawGroupRecord {
                group_id: group.id,
                capacity_gb: group.cap_gb,
                num_volumes: group.num_of_vols,
                service_level: group.slo,
                pool_name: group.srp,
                compression_enabled: group.compression,
            })
            .collect())
    }

    async fn fetch_volumes(
        &self,
        array_id: &str,
        limit: usize,
        offset: usize,
    ) -> Result<VolumePage> {
        let response: VolumesResponse = self
            .get_json(
                format!(
                    "{}/systems/{array_id}/volumes?limit={limit}&offset={offset}",
                    self.enhanced_base
                ),
                "volume page",
            )
            .await?;

        Ok(VolumePage {
            records: response
                .volumes
                .into_iter()
                .map(|volume| RawVolumeRecord {
                    volume_id: volume.id,
                    volume_name: volume.volume_identifier,
                    capacity_gb: volume.cap_gb,
                    allocated_percent: volume.allocated_percent,
                    group_ids: volume.storage_group_ids,
                    wwn: volume.wwn,
                    emulation_type: volume.emulation,
                })
                .collect(),
            total: response.count,
        })
    }
}
