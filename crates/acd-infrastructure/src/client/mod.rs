//! Upstream REST client
//!
//! The metrics client adapter for the Unisphere management service. The
//! service exposes two incompatible REST surfaces; [`UnisphereRestClient`]
//! hides both behind the domain's `ArrayMetricsClient` port.

mod unisphere;
mod wire;

pub use unisphere::UnisphereRestClient;
