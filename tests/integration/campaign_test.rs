//! Integration tests for campaigns.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_campaign_create_and_get() {
    let app = TestApp::new();

    let created = app
        .request(
            "POST",
            "/api/campaigns",
            Some(json!({ "name": "Summer launch", "created_by": app.user_id })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["data"]["id"].as_str().unwrap();

    let fetched = app
        .request("GET", &format!("/api/campaigns/{id}"), None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["name"], "Summer launch");
}

#[tokio::test]
async fn test_assets_can_be_filtered_by_campaign() {
    let app = TestApp::new();

    let campaign = app
        .request(
            "POST",
            "/api/campaigns",
            Some(json!({ "name": "Spring", "created_by": app.user_id })),
        )
        .await;
    let campaign_id = campaign.body["data"]["id"].as_str().unwrap();

    app.request(
        "POST",
        "/api/assets",
        Some(json!({
            "name": "In campaign",
            "kind": "ad-copy",
            "content": "Buy now",
            "campaign_id": campaign_id,
            "created_by": app.user_id,
        })),
    )
    .await;
    app.create_asset("Outside campaign", "Hello").await;

    let filtered = app
        .request(
            "GET",
            &format!("/api/assets?campaign_id={campaign_id}"),
            None,
        )
        .await;
    assert_eq!(filtered.status, StatusCode::OK);
    assert_eq!(filtered.body["data"]["total_items"], 1);
    assert_eq!(filtered.body["data"]["items"][0]["name"], "In campaign");
}

#[tokio::test]
async fn test_missing_campaign_is_404() {
    let app = TestApp::new();
    let response = app
        .request(
            "GET",
            "/api/campaigns/00000000-0000-0000-0000-999999999999",
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
