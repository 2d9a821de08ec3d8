//! Domain ports
//!
//! Contracts the infrastructure layer implements for the domain.

mod metrics_client;

pub use metrics_client::{ArrayMetricsClient, SharedMetricsClient};
