//! Collection Service Use Case
//!
//! Ties the capacity collector, the collection state machine, and the event
//! bus together: admits collection requests, runs admitted collections to
//! their terminal transition, and publishes lifecycle events along the way.
//!
//! Once admitted, a collection always runs to completion or fatal failure;
//! there is no externally triggered abort. Per-call timeouts in the metrics
//! client are the only automatic termination mechanism.

use crate::domain_services::CollectionStateMachine;
use crate::ports::infrastructure::SharedEventBus;
use crate::use_cases::collector::{CapacityCollector, CollectorLimits};
use acd_domain::entities::CapacitySnapshot;
use acd_domain::error::Result;
use acd_domain::events::CollectionEvent;
use acd_domain::ports::SharedMetricsClient;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, warn};

/// Orchestrates collection attempts end to end
pub struct CollectionService {
    collector: CapacityCollector,
    state: Arc<CollectionStateMachine>,
    event_bus: SharedEventBus,
}

impl CollectionService {
    /// Create a collection service with its collaborators
    pub fn new(
        client: SharedMetricsClient,
        limits: CollectorLimits,
        state: Arc<CollectionStateMachine>,
        event_bus: SharedEventBus,
    ) -> Self {
        Self {
            collector: CapacityCollector::new(client, limits),
            state,
            event_bus,
        }
    }

    /// The shared state machine backing status and snapshot reads
    pub fn state(&self) -> &Arc<CollectionStateMachine> {
        &self.state
    }

    /// Admit a collection and run it in the background
    ///
    /// Returns immediately after admission. A request arriving while a
    /// collection is running is rejected with `CollectionInProgress`; it is
    /// never queued or merged.
    pub fn trigger(self: &Arc<Self>, array_id: &str) -> Result<()> {
        self.state.try_start(array_id)?;

        let service = Arc::clone(self);
        let array_id = array_id.to_string();
        tokio::spawn(async move {
            // Terminal state and error reporting are handled inside
            let _ = service.run_admitted(&array_id).await;
        });
        Ok(())
    }

    /// Admit a collection and wait for its result
    ///
    /// Used by the one-shot CLI mode; the HTTP surface uses [`Self::trigger`].
    pub async fn collect_once(&self, array_id: &str) -> Result<Arc<CapacitySnapshot>> {
        self.state.try_start(array_id)?;
        self.run_admitted(array_id).await
    }

    /// Run an already-admitted collection to its terminal transition
    async fn run_admitted(&self, array_id: &str) -> Result<Arc<CapacitySnapshot>> {
        self.publish(CollectionEvent::CollectionStarted {
            array_id: array_id.to_string(),
            timestamp: Utc::now(),
        })
        .await;

        match self.collector.collect(array_id).await {
            Ok(snapshot) => {
                let completed = CollectionEvent::CollectionCompleted {
                    array_id: snapshot.array_id.clone(),
                    timestamp: Utc::now(),
                    total_pools: snapshot.total_pools(),
                    total_groups: snapshot.total_groups(),
                    total_volumes: snapshot.total_volumes(),
                    system_utilization_percent: snapshot.system.utilization_percent,
                };
                let snapshot = self.state.complete(snapshot);
                self.publish(completed).await;
                Ok(snapshot)
            }
            Err(e) => {
                let message = e.to_string();
                error!(array_id, error = %message, "Collection failed");
                self.state.fail(&message);
                self.publish(CollectionEvent::CollectionError {
                    error: message,
                    timestamp: Utc::now(),
                })
                .await;
                Err(e)
            }
        }
    }

    async fn publish(&self, event: CollectionEvent) {
        if let Err(e) = self.event_bus.publish_event(event).await {
            warn!(error = %e, "Failed to publish collection event");
        }
    }
}
