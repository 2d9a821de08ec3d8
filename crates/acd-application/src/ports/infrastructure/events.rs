//! Event Bus Provider Port
//!
//! Defines the contract for publishing collection lifecycle events to
//! connected observers without coupling to a specific implementation.
//! Broadcast is fire-and-forget: the absence of any subscriber is not an
//! error, and nothing is buffered or replayed for observers that connect
//! later.

use acd_domain::error::Result;
use acd_domain::events::CollectionEvent;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;

/// Stream of collection lifecycle events delivered to one subscriber
pub type CollectionEventStream = Pin<Box<dyn Stream<Item = CollectionEvent> + Send>>;

/// Event bus provider interface for pub/sub
#[async_trait]
pub trait EventBusProvider: Send + Sync {
    /// Publish an event to all currently connected subscribers
    ///
    /// Returns Ok(()) once the event was handed to the bus; delivery to any
    /// individual subscriber is best-effort.
    async fn publish_event(&self, event: CollectionEvent) -> Result<()>;

    /// Subscribe to events published from this point on
    async fn subscribe_events(&self) -> Result<CollectionEventStream>;

    /// Check if there are any active subscribers
    fn has_subscribers(&self) -> bool;
}

/// Shared event bus handle
pub type SharedEventBus = Arc<dyn EventBusProvider>;
