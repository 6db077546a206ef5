//! JSON endpoint tests

use rocket::http::Status;
use rocket::local::asynchronous::Client;
use serde_json::Value;

use crate::test_utils::sample_client;

async fn get_json(client: &Client, uri: &str) -> (Status, Value) {
    let response = client.get(uri).dispatch().await;
    let status = response.status();
    let json = response
        .into_json::<Value>()
        .await
        .expect("JSON response body");
    (status, json)
}

#[rocket::async_test]
async fn test_status_api_reports_sorted_sources_and_summaries() {
    let client = sample_client().await;
    let (status, json) = get_json(&client, "/api/indexing/status").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(
        json["sorted_sources"],
        serde_json::json!(["confluence", "github", "google_drive", "ingestion_api"])
    );
    assert_eq!(json["filters_active"], false);
    assert_eq!(
        json["display_sources"],
        serde_json::json!(["confluence", "github", "google_drive", "ingestion_api", "slack"])
    );
    assert_eq!(json["summaries"]["slack"]["count"], 1);
    assert_eq!(json["summaries"]["slack"]["active"], 1);
    assert_eq!(json["summaries"]["google_drive"]["errors"], 1);
    assert_eq!(json["table"]["should_expand_all"], true);
    assert_eq!(json["table"]["show_access_column"], true);
}

#[rocket::async_test]
async fn test_status_api_applies_filters() {
    let client = sample_client().await;
    let (_, json) = get_json(&client, "/api/indexing/status?access=private&access=bogus").await;

    assert_eq!(json["filters_active"], true);
    assert_eq!(json["filters"]["access_type"], serde_json::json!(["private"]));
    assert_eq!(json["sources_to_expand"], serde_json::json!(["github"]));
    let sections = json["table"]["sections"].as_array().expect("sections");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["source"], "github");
}

#[rocket::async_test]
async fn test_connector_detail() {
    let client = sample_client().await;

    let (status, json) = get_json(&client, "/admin/connector/1").await;
    assert_eq!(status, Status::Ok);
    assert_eq!(json["connector"]["name"], "Engineering Wiki");
    assert_eq!(json["editable"], true);
    assert_eq!(json["status"], "active");

    let (_, json) = get_json(&client, "/admin/connector/3").await;
    assert_eq!(json["editable"], false);
    assert_eq!(json["status"], "paused");
    assert_eq!(json["access"]["kind"], "private");
}

#[rocket::async_test]
async fn test_connector_detail_not_found() {
    let client = sample_client().await;
    let (status, json) = get_json(&client, "/admin/connector/999").await;

    assert_eq!(status, Status::NotFound);
    assert_eq!(json["error"], "not_found");
    assert_eq!(json["code"], 404);
}

#[rocket::async_test]
async fn test_federated_detail() {
    let client = sample_client().await;

    let (status, json) = get_json(&client, "/admin/federated/7").await;
    assert_eq!(status, Status::Ok);
    assert_eq!(json["name"], "Live Slack");
    assert_eq!(json["source"], "federated_slack");

    let (status, json) = get_json(&client, "/admin/federated/8").await;
    assert_eq!(status, Status::NotFound);
    assert_eq!(json["error"], "not_found");
}

#[rocket::async_test]
async fn test_liveness_probe() {
    let client = sample_client().await;
    let (status, json) = get_json(&client, "/live").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(json["status"], "alive");
}
