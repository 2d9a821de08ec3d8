//! API request handlers
//!
//! HTTP handlers for the capacity API. Every read endpoint serves the
//! stored snapshot; only `POST /collect` touches the collection engine,
//! and even that returns as soon as the collection is admitted.

use acd_application::{CollectionService, CollectionStateMachine};
use acd_application::ports::infrastructure::SharedEventBus;
use acd_domain::Error;
use acd_domain::entities::{
    CapacitySnapshot, CollectionStatus, GroupCapacity, PoolCapacity, SystemCapacity,
};
use chrono::Utc;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get, post};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use super::models::{
    ApiErrorResponse, CollectResponse, HealthResponse, ServiceLevelBreakdown, SummaryResponse,
    VolumePageResponse,
};

/// Number of top consumers returned when no limit is given
const DEFAULT_TOP_CONSUMERS: usize = 10;

/// API handler state containing shared engine references
#[derive(Clone)]
pub struct ApiState {
    /// Collection orchestration service
    pub service: Arc<CollectionService>,
    /// Collection state machine backing status and snapshot reads
    pub state: Arc<CollectionStateMachine>,
    /// Event bus feeding the SSE stream
    pub event_bus: SharedEventBus,
    /// Array targeted by collection triggers
    pub array_id: String,
}

type NoData = (Status, Json<ApiErrorResponse>);

fn require_snapshot(state: &ApiState) -> Result<Arc<CapacitySnapshot>, NoData> {
    state
        .state
        .snapshot()
        .ok_or((Status::NotFound, Json(ApiErrorResponse::no_data())))
}

/// Get current collection status
#[get("/status")]
pub async fn get_status(state: &State<ApiState>) -> Json<CollectionStatus> {
    Json(state.state.status())
}

/// Trigger a new capacity collection
///
/// Responds immediately: 202 once the collection is admitted and running
/// in the background, 409 when one is already in progress. The request is
/// never queued.
#[post("/collect")]
pub async fn trigger_collection(
    state: &State<ApiState>,
) -> Result<(Status, Json<CollectResponse>), (Status, Json<ApiErrorResponse>)> {
    match state.service.trigger(&state.array_id) {
        Ok(()) => {
            info!(array_id = %state.array_id, "Collection triggered");
            Ok((Status::Accepted, Json(CollectResponse::started())))
        }
        Err(Error::CollectionInProgress) => {
            Err((Status::Conflict, Json(ApiErrorResponse::conflict())))
        }
        Err(e) => Err((
            Status::InternalServerError,
            Json(ApiErrorResponse::internal(e.to_string())),
        )),
    }
}

/// Get system-level capacity data
#[get("/system")]
pub async fn get_system(state: &State<ApiState>) -> Result<Json<SystemCapacity>, NoData> {
    let snapshot = require_snapshot(state)?;
    Ok(Json(snapshot.system.clone()))
}

/// Get all pool capacity data
#[get("/pools")]
pub async fn get_pools(state: &State<ApiState>) -> Result<Json<Vec<PoolCapacity>>, NoData> {
    let snapshot = require_snapshot(state)?;
    Ok(Json(snapshot.pools.clone()))
}

/// Get group capacity data with optional filtering
///
/// # Arguments
///
/// * `service_level` - Only groups carrying this service level tag
/// * `pool` - Only groups owned by this pool
/// * `limit` - Cap on the number of returned groups
#[get("/groups?<service_level>&<pool>&<limit>")]
pub async fn get_groups(
    state: &State<ApiState>,
    service_level: Option<&str>,
    pool: Option<&str>,
    limit: Option<usize>,
) -> Result<Json<Vec<GroupCapacity>>, NoData> {
    let snapshot = require_snapshot(state)?;

    let mut groups: Vec<GroupCapacity> = snapshot
        .groups
        .iter()
        .filter(|g| service_level.is_none_or(|sl| g.service_level.as_deref() == Some(sl)))
        .filter(|g| pool.is_none_or(|p| g.pool_name.as_deref() == Some(p)))
        .cloned()
        .collect();

    // Largest first for display
    groups.sort_by(|a, b| b.capacity_gb.total_cmp(&a.capacity_gb));
    if let Some(limit) = limit {
        groups.truncate(limit);
    }
    Ok(Json(groups))
}

/// Get volume capacity data with pagination and filtering
///
/// Served from the stored snapshot, not a live upstream call. Volumes are
/// ordered largest first; `offset`/`limit` slice that ordering.
#[get("/volumes?<limit>&<offset>&<group>")]
pub async fn get_volumes(
    state: &State<ApiState>,
    limit: Option<usize>,
    offset: Option<usize>,
    group: Option<&str>,
) -> Result<Json<VolumePageResponse>, NoData> {
    let snapshot = require_snapshot(state)?;
    let offset = offset.unwrap_or(0);

    let mut volumes: Vec<_> = snapshot
        .volumes
        .iter()
        .filter(|v| group.is_none_or(|g| v.group_ids.iter().any(|id| id == g)))
        .cloned()
        .collect();
    volumes.sort_by(|a, b| b.capacity_gb.total_cmp(&a.capacity_gb));

    let total = volumes.len();
    let items: Vec<_> = match limit {
        Some(limit) => volumes.into_iter().skip(offset).take(limit).collect(),
        None => volumes.into_iter().skip(offset).collect(),
    };

    Ok(Json(VolumePageResponse {
        total,
        offset,
        limit,
        items,
    }))
}

/// Get the high-level capacity summary
#[get("/summary")]
pub async fn get_summary(state: &State<ApiState>) -> Result<Json<SummaryResponse>, NoData> {
    let snapshot = require_snapshot(state)?;
    Ok(Json(SummaryResponse::from_snapshot(&snapshot)))
}

/// Get capacity aggregated by service level
#[get("/trends/service-levels")]
pub async fn get_service_level_breakdown(
    state: &State<ApiState>,
) -> Result<Json<Vec<ServiceLevelBreakdown>>, NoData> {
    let snapshot = require_snapshot(state)?;

    let mut breakdown: BTreeMap<String, ServiceLevelBreakdown> = BTreeMap::new();
    for group in &snapshot.groups {
        let tag = group.service_level.clone().unwrap_or_else(|| "None".to_string());
        let entry = breakdown
            .entry(tag.clone())
            .or_insert_with(|| ServiceLevelBreakdown {
                service_level: tag,
                count: 0,
                total_capacity_gb: 0.0,
                num_volumes: 0,
            });
        entry.count += 1;
        entry.total_capacity_gb += group.capacity_gb;
        entry.num_volumes += group.num_volumes;
    }

    Ok(Json(breakdown.into_values().collect()))
}

/// Get the top storage groups by capacity
#[get("/trends/top-consumers?<limit>")]
pub async fn get_top_consumers(
    state: &State<ApiState>,
    limit: Option<usize>,
) -> Result<Json<Vec<GroupCapacity>>, NoData> {
    let snapshot = require_snapshot(state)?;

    let mut groups = snapshot.groups.clone();
    groups.sort_by(|a, b| b.capacity_gb.total_cmp(&a.capacity_gb));
    groups.truncate(limit.unwrap_or(DEFAULT_TOP_CONSUMERS));
    Ok(Json(groups))
}

/// Health check endpoint for monitoring
#[get("/health")]
pub async fn health_check(state: &State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        has_data: state.state.snapshot().is_some(),
    })
}
