//! Unit tests for collection lifecycle events

use acd_domain::CollectionEvent;
use chrono::Utc;

#[test]
fn test_event_json_carries_type_discriminator() {
    let event = CollectionEvent::CollectionError {
        error: "Upstream unavailable: connect timeout".to_string(),
        timestamp: Utc::now(),
    };

    let json: serde_json::Value = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "collection_error");
    assert_eq!(json["error"], "Upstream unavailable: connect timeout");
}

#[test]
fn test_completed_event_carries_counts_and_utilization() {
    let event = CollectionEvent::CollectionCompleted {
        array_id: "000297600111".to_string(),
        timestamp: Utc::now(),
        total_pools: 2,
        total_groups: 14,
        total_volumes: 250,
        system_utilization_percent: 65.0,
    };

    let json: serde_json::Value = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "collection_completed");
    assert_eq!(json["total_volumes"], 250);
    assert_eq!(json["system_utilization_percent"], 65.0);
}

#[test]
fn test_event_name_matches_discriminator() {
    let event = CollectionEvent::CollectionStarted {
        array_id: "A1".to_string(),
        timestamp: Utc::now(),
    };
    assert_eq!(event.name(), "collection_started");

    let json: serde_json::Value = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], event.name());
}

#[test]
fn test_event_round_trips_through_json() {
    let event = CollectionEvent::CollectionStarted {
        array_id: "A1".to_string(),
        timestamp: Utc::now(),
    };

    let encoded = serde_json::to_string(&event).unwrap();
    let decoded: CollectionEvent = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, event);
}
