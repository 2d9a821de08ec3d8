//! Tests for the collection trigger lifecycle and failure surfacing

use crate::support::{StubMetricsClient, test_client, wait_until_idle};
use rocket::http::Status;
use serde_json::Value;
use std::time::Duration;

#[rocket::async_test]
async fn test_initial_status_is_never_collected() {
    let client = test_client(StubMetricsClient::default()).await;

    let response = client.get("/api/status").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let status: Value =
        serde_json::from_str(&response.into_string().await.expect("body")).unwrap();
    assert_eq!(status["in_progress"], false);
    assert_eq!(status["has_data"], false);
    assert!(status["last_collection_time"].is_null());
    assert!(status["last_error"].is_null());
}

#[rocket::async_test]
async fn test_collect_accepts_then_conflicts_while_running() {
    let stub = StubMetricsClient {
        system_delay: Some(Duration::from_millis(300)),
        ..StubMetricsClient::default()
    };
    let client = test_client(stub).await;

    let response = client.post("/api/collect").dispatch().await;
    assert_eq!(response.status(), Status::Accepted);
    let body: Value = serde_json::from_str(&response.into_string().await.expect("body")).unwrap();
    assert_eq!(body["status"], "started");

    // Immediately after the 202, the window is open
    let status_body = client
        .get("/api/status")
        .dispatch()
        .await
        .into_string()
        .await
        .expect("status body");
    let status: Value = serde_json::from_str(&status_body).unwrap();
    assert_eq!(status["in_progress"], true);

    // A second trigger in that window conflicts instead of queueing
    let response = client.post("/api/collect").dispatch().await;
    assert_eq!(response.status(), Status::Conflict);
    let body: Value = serde_json::from_str(&response.into_string().await.expect("body")).unwrap();
    assert_eq!(body["code"], "COLLECTION_IN_PROGRESS");

    let status = wait_until_idle(&client).await;
    assert_eq!(status["has_data"], true);
}

#[rocket::async_test]
async fn test_successful_collection_updates_status() {
    let client = test_client(StubMetricsClient::default()).await;

    client.post("/api/collect").dispatch().await;
    let status = wait_until_idle(&client).await;

    assert_eq!(status["has_data"], true);
    assert!(status["last_error"].is_null());
    assert!(status["last_collection_time"].is_string());
    assert_eq!(status["array_id"], "000297600111");
}

#[rocket::async_test]
async fn test_fatal_failure_keeps_no_data_and_records_error() {
    let stub = StubMetricsClient {
        fail_system: true,
        ..StubMetricsClient::default()
    };
    let client = test_client(stub).await;

    client.post("/api/collect").dispatch().await;
    let status = wait_until_idle(&client).await;

    assert_eq!(status["has_data"], false);
    assert!(status["last_error"]
        .as_str()
        .unwrap()
        .contains("Upstream unavailable"));

    // No snapshot was produced or replaced
    let response = client.get("/api/system").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_partial_pool_failure_is_invisible_in_status() {
    let stub = StubMetricsClient {
        failing_pools: vec!["SRP_2"],
        ..StubMetricsClient::default()
    };
    let client = test_client(stub).await;

    client.post("/api/collect").dispatch().await;
    let status = wait_until_idle(&client).await;

    // Partial failures surface in the snapshot, not the top-level status
    assert_eq!(status["has_data"], true);
    assert!(status["last_error"].is_null());

    let pools_body = client
        .get("/api/pools")
        .dispatch()
        .await
        .into_string()
        .await
        .expect("pools body");
    let pools: Value = serde_json::from_str(&pools_body).unwrap();
    assert_eq!(pools.as_array().unwrap().len(), 2);
}
