//! Unit tests for the collection service lifecycle

use crate::support::{MockMetricsClient, RecordingEventBus};
use acd_application::{CollectionService, CollectionStateMachine, CollectorLimits};
use acd_domain::events::CollectionEvent;
use acd_domain::Error;
use std::sync::Arc;
use std::time::Duration;

fn make_service(
    client: MockMetricsClient,
) -> (Arc<CollectionService>, Arc<CollectionStateMachine>, Arc<RecordingEventBus>) {
    let state = CollectionStateMachine::new_shared();
    let bus = Arc::new(RecordingEventBus::default());
    let service = Arc::new(CollectionService::new(
        Arc::new(client),
        CollectorLimits::default(),
        Arc::clone(&state),
        bus.clone(),
    ));
    (service, state, bus)
}

#[tokio::test]
async fn test_collect_once_publishes_started_then_completed() {
    let (service, state, bus) = make_service(MockMetricsClient::healthy(10));

    let snapshot = service.collect_once("A1").await.unwrap();
    assert_eq!(snapshot.total_volumes(), 10);

    let events = bus.published();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], CollectionEvent::CollectionStarted { .. }));
    match &events[1] {
        CollectionEvent::CollectionCompleted {
            total_pools,
            total_volumes,
            ..
        } => {
            assert_eq!(*total_pools, 3);
            assert_eq!(*total_volumes, 10);
        }
        other => panic!("expected completed event, got {other:?}"),
    }

    let status = state.status();
    assert!(status.has_data);
    assert!(status.last_error.is_none());
}

#[tokio::test]
async fn test_fatal_failure_publishes_error_and_records_cause() {
    let mut client = MockMetricsClient::healthy(10);
    client.fail_system = true;
    let (service, state, bus) = make_service(client);

    let err = service.collect_once("A1").await.unwrap_err();
    assert!(matches!(err, Error::UpstreamUnavailable { .. }));

    let events = bus.published();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[1], CollectionEvent::CollectionError { .. }));

    let status = state.status();
    assert!(!status.in_progress);
    assert!(!status.has_data);
    assert!(status.last_error.as_deref().unwrap().contains("Upstream unavailable"));
}

#[tokio::test]
async fn test_trigger_rejects_while_collection_runs() {
    let mut client = MockMetricsClient::healthy(10);
    client.system_delay = Some(Duration::from_millis(200));
    let (service, state, _bus) = make_service(client);

    service.trigger("A1").unwrap();
    assert!(state.status().in_progress);

    // The window is open: a second request conflicts instead of queueing
    let err = service.trigger("A1").unwrap_err();
    assert!(matches!(err, Error::CollectionInProgress));

    tokio::time::sleep(Duration::from_millis(500)).await;
    let status = state.status();
    assert!(!status.in_progress);
    assert!(status.has_data);
}

#[tokio::test]
async fn test_partial_failure_still_completes() {
    let mut client = MockMetricsClient::healthy(10);
    client.failing_pools.insert("SRP_1".to_string());
    let (service, state, bus) = make_service(client);

    let snapshot = service.collect_once("A1").await.unwrap();
    assert_eq!(snapshot.total_pools(), 2);
    assert_eq!(snapshot.level_failures.len(), 1);

    // Partial failures surface in the snapshot, not in the status
    let status = state.status();
    assert!(status.last_error.is_none());
    assert!(matches!(
        bus.published().last().unwrap(),
        CollectionEvent::CollectionCompleted { .. }
    ));
}
