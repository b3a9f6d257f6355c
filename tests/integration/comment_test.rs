//! Integration tests for asset comments.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_comment_create_and_list() {
    let app = TestApp::new();
    let asset = app.create_asset("Commented", "Body").await;
    let id = asset["id"].as_str().unwrap();

    let created = app
        .request(
            "POST",
            &format!("/api/assets/{id}/comments"),
            Some(json!({ "content": "Love the opening line", "created_by": app.user_id })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let listed = app
        .request("GET", &format!("/api/assets/{id}/comments"), None)
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let comments = listed.body["data"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "Love the opening line");
}

#[tokio::test]
async fn test_empty_comment_is_rejected() {
    let app = TestApp::new();
    let asset = app.create_asset("Commented", "Body").await;
    let id = asset["id"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            &format!("/api/assets/{id}/comments"),
            Some(json!({ "content": "", "created_by": app.user_id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comment_on_missing_asset_is_404() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/assets/00000000-0000-0000-0000-999999999999/comments",
            Some(json!({ "content": "hello?", "created_by": app.user_id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_commenting_does_not_touch_version_history() {
    let app = TestApp::new();
    let asset = app.create_asset("Commented", "Body").await;
    let id = asset["id"].as_str().unwrap();

    app.request(
        "POST",
        &format!("/api/assets/{id}/comments"),
        Some(json!({ "content": "note", "created_by": app.user_id })),
    )
    .await;

    let fetched = app.request("GET", &format!("/api/assets/{id}"), None).await;
    assert_eq!(fetched.body["data"]["current_version"], 1);
}
