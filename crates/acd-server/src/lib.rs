//! # Array Capacity Dashboard Server
//!
//! HTTP surface of the capacity collection engine. Exposes synchronous
//! status and snapshot reads, the collection trigger, and a Server-Sent
//! Events stream of collection lifecycle events.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use acd_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Serve with default config (working directory + environment)
//!     run(None, false).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! This crate is the transport layer only: it wires the infrastructure
//! adapters into the application's collection service and renders its
//! results. All collection semantics live in `acd-application`.

// Allow Rust 2024 compatibility issues from Rocket's EventStream macro
#![allow(rust_2024_compatibility)]

pub mod api;
pub mod init;

// Re-export core types for public API
pub use api::{ApiState, api_rocket};
pub use init::run;
