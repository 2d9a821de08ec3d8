//! API routes
//!
//! Route definitions for the capacity API.

use rocket::{Build, Rocket, routes};

use super::handlers::{
    ApiState, get_groups, get_pools, get_service_level_breakdown, get_status, get_summary,
    get_system, get_top_consumers, get_volumes, health_check, trigger_collection,
};
use super::sse::events_stream;

/// Build the Rocket instance serving the capacity API
///
/// Everything is mounted under `/api`; see the module table in
/// [`crate::api`] for the full endpoint list.
pub fn api_rocket(state: ApiState) -> Rocket<Build> {
    rocket::build().manage(state).mount(
        "/api",
        routes![
            get_status,
            trigger_collection,
            get_system,
            get_pools,
            get_groups,
            get_volumes,
            get_summary,
            get_service_level_breakdown,
            get_top_consumers,
            health_check,
            events_stream,
        ],
    )
}
