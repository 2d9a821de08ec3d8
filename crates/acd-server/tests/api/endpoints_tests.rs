//! Tests for snapshot read endpoints

use crate::support::{StubMetricsClient, test_client, wait_until_idle};
use rocket::http::Status;
use serde_json::Value;

async fn get_json(client: &rocket::local::asynchronous::Client, path: &str) -> Value {
    let response = client.get(path).dispatch().await;
    assert_eq!(response.status(), Status::Ok, "GET {path}");
    serde_json::from_str(&response.into_string().await.expect("body")).unwrap()
}

#[rocket::async_test]
async fn test_read_endpoints_are_404_before_first_collection() {
    let client = test_client(StubMetricsClient::default()).await;

    for path in [
        "/api/system",
        "/api/pools",
        "/api/groups",
        "/api/volumes",
        "/api/summary",
        "/api/trends/service-levels",
        "/api/trends/top-consumers",
    ] {
        let response = client.get(path).dispatch().await;
        assert_eq!(response.status(), Status::NotFound, "GET {path}");

        let body: Value =
            serde_json::from_str(&response.into_string().await.expect("body")).unwrap();
        assert_eq!(body["code"], "NO_DATA");
    }
}

#[rocket::async_test]
async fn test_summary_counts_match_snapshot_lengths() {
    let client = test_client(StubMetricsClient::default()).await;
    client.post("/api/collect").dispatch().await;
    wait_until_idle(&client).await;

    let summary = get_json(&client, "/api/summary").await;
    assert_eq!(summary["array_id"], "000297600111");
    assert_eq!(summary["counts"]["pools"], 3);
    assert_eq!(summary["counts"]["groups"], 2);
    assert_eq!(summary["counts"]["volumes"], 250);
    assert_eq!(summary["system"]["free_gb"], 350.0);
    assert_eq!(summary["system"]["utilization_percent"], 65.0);

    let pools = get_json(&client, "/api/pools").await;
    assert_eq!(pools.as_array().unwrap().len(), 3);

    let system = get_json(&client, "/api/system").await;
    assert_eq!(system["total_usable_gb"], 1000.0);
    assert_eq!(system["utilization_percent"], 65.0);
}

#[rocket::async_test]
async fn test_volume_pagination_slices_the_snapshot() {
    let client = test_client(StubMetricsClient::default()).await;
    client.post("/api/collect").dispatch().await;
    wait_until_idle(&client).await;

    let page = get_json(&client, "/api/volumes?limit=100&offset=0").await;
    assert_eq!(page["total"], 250);
    assert_eq!(page["items"].as_array().unwrap().len(), 100);

    let page = get_json(&client, "/api/volumes?limit=100&offset=200").await;
    assert_eq!(page["total"], 250);
    assert_eq!(page["items"].as_array().unwrap().len(), 50);
    assert_eq!(page["offset"], 200);

    // Past the end: empty page, same total
    let page = get_json(&client, "/api/volumes?limit=100&offset=300").await;
    assert_eq!(page["items"].as_array().unwrap().len(), 0);
    assert_eq!(page["total"], 250);
}

#[rocket::async_test]
async fn test_volume_group_filter_narrows_total() {
    let client = test_client(StubMetricsClient::default()).await;
    client.post("/api/collect").dispatch().await;
    wait_until_idle(&client).await;

    let page = get_json(&client, "/api/volumes?group=db_sg").await;
    // Even indices only
    assert_eq!(page["total"], 125);
    assert!(page["items"]
        .as_array()
        .unwrap()
        .iter()
        .all(|v| v["group_ids"].as_array().unwrap().contains(&Value::from("db_sg"))));
}

#[rocket::async_test]
async fn test_group_filters_and_ordering() {
    let client = test_client(StubMetricsClient::default()).await;
    client.post("/api/collect").dispatch().await;
    wait_until_idle(&client).await;

    let groups = get_json(&client, "/api/groups").await;
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    // Largest first
    assert_eq!(groups[0]["group_id"], "db_sg");

    let filtered = get_json(&client, "/api/groups?service_level=Diamond").await;
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["group_id"], "db_sg");

    let by_pool = get_json(&client, "/api/groups?pool=SRP_2").await;
    assert_eq!(by_pool.as_array().unwrap().len(), 1);

    let capped = get_json(&client, "/api/groups?limit=1").await;
    assert_eq!(capped.as_array().unwrap().len(), 1);
}

#[rocket::async_test]
async fn test_service_level_breakdown_sums_capacity() {
    let client = test_client(StubMetricsClient::default()).await;
    client.post("/api/collect").dispatch().await;
    wait_until_idle(&client).await;

    let breakdown = get_json(&client, "/api/trends/service-levels").await;
    let breakdown = breakdown.as_array().unwrap();
    assert_eq!(breakdown.len(), 2);

    let diamond = breakdown
        .iter()
        .find(|entry| entry["service_level"] == "Diamond")
        .expect("Diamond entry");
    assert_eq!(diamond["count"], 1);
    assert_eq!(diamond["total_capacity_gb"], 512.0);
    assert_eq!(diamond["num_volumes"], 8);
}

#[rocket::async_test]
async fn test_top_consumers_orders_by_capacity() {
    let client = test_client(StubMetricsClient::default()).await;
    client.post("/api/collect").dispatch().await;
    wait_until_idle(&client).await;

    let top = get_json(&client, "/api/trends/top-consumers?limit=1").await;
    let top = top.as_array().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0]["group_id"], "db_sg");
}

#[rocket::async_test]
async fn test_health_reports_data_availability() {
    let client = test_client(StubMetricsClient::default()).await;

    let health = get_json(&client, "/api/health").await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["has_data"], false);

    client.post("/api/collect").dispatch().await;
    wait_until_idle(&client).await;

    let health = get_json(&client, "/api/health").await;
    assert_eq!(health["has_data"], true);
}
