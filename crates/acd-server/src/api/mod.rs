//! HTTP API
//!
//! REST and SSE surface for the capacity collection engine.
//!
//! ## Endpoints
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/api/status` | GET | Collection status |
//! | `/api/collect` | POST | Trigger a collection (409 when one is running) |
//! | `/api/system` | GET | System capacity from the stored snapshot |
//! | `/api/pools` | GET | Pool capacities |
//! | `/api/groups` | GET | Group capacities, filterable |
//! | `/api/volumes` | GET | Paged volume capacities |
//! | `/api/summary` | GET | Counts plus system block for the landing page |
//! | `/api/trends/service-levels` | GET | Capacity aggregated by service level |
//! | `/api/trends/top-consumers` | GET | Top groups by capacity |
//! | `/api/health` | GET | Liveness check |
//! | `/api/events` | GET | SSE stream of collection lifecycle events |
//!
//! All reads are served from the stored snapshot, never from a live
//! upstream call.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod sse;

// Re-export main types
pub use handlers::ApiState;
pub use models::{
    ApiErrorResponse, CollectResponse, HealthResponse, ServiceLevelBreakdown, SummaryResponse,
    VolumePageResponse,
};
pub use routes::api_rocket;
