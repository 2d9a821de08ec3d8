//! Event Bus Infrastructure
//!
//! In-process event bus implementations behind the application's
//! `EventBusProvider` port.

use acd_application::ports::infrastructure::{CollectionEventStream, EventBusProvider};
use acd_domain::error::Result;
use acd_domain::events::CollectionEvent;
use async_trait::async_trait;
use futures::stream;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

// ============================================================================
// Null Event Bus (Testing)
// ============================================================================

/// Null event bus for testing
///
/// Discards all published events without any side effects.
#[derive(Debug, Default)]
pub struct NullEventBus;

impl NullEventBus {
    /// Create a new null event bus
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl EventBusProvider for NullEventBus {
    async fn publish_event(&self, _event: CollectionEvent) -> Result<()> {
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<CollectionEventStream> {
        Ok(Box::pin(stream::empty()))
    }

    fn has_subscribers(&self) -> bool {
        false
    }
}

// ============================================================================
// Tokio Broadcast Event Bus (Production)
// ============================================================================

/// Default channel capacity
const DEFAULT_CAPACITY: usize = 1024;

/// Event bus using tokio broadcast channels
///
/// Provides in-process event distribution with multiple subscribers.
/// Events are broadcast to all active subscribers without persistence:
/// an observer that is not connected when an event fires simply misses it
/// and must resynchronize through a status read.
#[derive(Clone)]
pub struct TokioBroadcastEventBus {
    sender: Arc<broadcast::Sender<CollectionEvent>>,
    capacity: usize,
}

impl TokioBroadcastEventBus {
    /// Create a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for TokioBroadcastEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioBroadcastEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioBroadcastEventBus")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl EventBusProvider for TokioBroadcastEventBus {
    async fn publish_event(&self, event: CollectionEvent) -> Result<()> {
        match self.sender.send(event) {
            Ok(count) => {
                debug!("Published event to {} subscribers", count);
            }
            Err(_) => {
                // Fire-and-forget: no subscriber is not an error
                debug!("Published event but no subscribers");
            }
        }
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<CollectionEventStream> {
        let receiver = self.sender.subscribe();

        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Event stream lagged by {} events", n);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        return None;
                    }
                }
            }
        });

        Ok(Box::pin(stream))
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}
