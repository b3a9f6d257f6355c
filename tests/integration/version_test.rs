//! Integration tests for version history behavior.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_sequential_saves_keep_chronological_order() {
    let app = TestApp::new();
    let asset = app.create_asset("Ordered", "start").await;
    let id = asset["id"].as_str().unwrap();

    for content in ["A", "B"] {
        let response = app
            .request(
                "PATCH",
                &format!("/api/assets/{id}"),
                Some(json!({ "content": content })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let fetched = app.request("GET", &format!("/api/assets/{id}"), None).await;
    let history = fetched.body["data"]["version_history"].as_array().unwrap();
    let contents: Vec<&str> = history.iter().map(|v| v["content"].as_str().unwrap()).collect();
    assert_eq!(contents, vec!["start", "A", "B"]);
    assert_eq!(fetched.body["data"]["content"], "B");
}

#[tokio::test]
async fn test_versions_endpoint_is_newest_first() {
    let app = TestApp::new();
    let asset = app.create_asset("History", "v1 text").await;
    let id = asset["id"].as_str().unwrap();

    app.request(
        "PATCH",
        &format!("/api/assets/{id}"),
        Some(json!({ "content": "v2 text" })),
    )
    .await;

    let response = app
        .request("GET", &format!("/api/assets/{id}/versions"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let versions = response.body["data"].as_array().unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0]["version"], 2);
    assert_eq!(versions[1]["version"], 1);
}

#[tokio::test]
async fn test_versions_of_missing_asset_is_404() {
    let app = TestApp::new();
    let response = app
        .request(
            "GET",
            "/api/assets/00000000-0000-0000-0000-999999999999/versions",
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_restoring_old_content_appends_a_new_version() {
    // Restore is client-side; persisting it goes through the normal save
    // path and lands on top of the history.
    let app = TestApp::new();
    let asset = app.create_asset("Restorable", "original").await;
    let id = asset["id"].as_str().unwrap();

    app.request(
        "PATCH",
        &format!("/api/assets/{id}"),
        Some(json!({ "content": "revised" })),
    )
    .await;

    let restored = app
        .request(
            "PATCH",
            &format!("/api/assets/{id}"),
            Some(json!({ "content": "original", "base_version": 2 })),
        )
        .await;

    assert_eq!(restored.status, StatusCode::OK);
    assert_eq!(restored.body["data"]["content"], "original");
    assert_eq!(restored.body["data"]["current_version"], 3);
}
