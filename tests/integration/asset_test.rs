//! Integration tests for the asset lifecycle.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_asset_records_version_one() {
    let app = TestApp::new();

    let asset = app.create_asset("Welcome email", "Hello there").await;

    assert_eq!(asset["current_version"], 1);
    assert_eq!(asset["status"], "draft");
    let history = asset["version_history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["content"], "Hello there");
}

#[tokio::test]
async fn test_create_asset_validates_name_length() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/assets",
            Some(json!({
                "name": "x",
                "kind": "email",
                "content": "Hello",
                "created_by": app.user_id,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_missing_asset_is_404() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/assets/00000000-0000-0000-0000-999999999999",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_edit_save_scenario() {
    let app = TestApp::new();
    let asset = app.create_asset("Launch email", "First draft").await;
    let id = asset["id"].as_str().unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/api/assets/{id}"),
            Some(json!({ "content": "Second draft" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let updated = &response.body["data"];
    assert_eq!(updated["content"], "Second draft");
    assert_eq!(updated["current_version"], 2);
    assert_eq!(updated["version_history"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_saving_identical_content_appends_nothing() {
    let app = TestApp::new();
    let asset = app.create_asset("Launch email", "Same text").await;
    let id = asset["id"].as_str().unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/api/assets/{id}"),
            Some(json!({ "content": "Same text" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["current_version"], 1);
    assert_eq!(
        response.body["data"]["version_history"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_stale_base_version_is_409() {
    let app = TestApp::new();
    let asset = app.create_asset("Launch email", "First").await;
    let id = asset["id"].as_str().unwrap();

    let first = app
        .request(
            "PATCH",
            &format!("/api/assets/{id}"),
            Some(json!({ "content": "A", "base_version": 1 })),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "PATCH",
            &format!("/api/assets/{id}"),
            Some(json!({ "content": "B", "base_version": 1 })),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    // The first write survived.
    let current = app.request("GET", &format!("/api/assets/{id}"), None).await;
    assert_eq!(current.body["data"]["content"], "A");
}

#[tokio::test]
async fn test_metadata_update_leaves_history_alone() {
    let app = TestApp::new();
    let asset = app.create_asset("Launch email", "Body").await;
    let id = asset["id"].as_str().unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/api/assets/{id}"),
            Some(json!({ "name": "Renamed email", "status": "in-review" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Renamed email");
    assert_eq!(response.body["data"]["status"], "in-review");
    assert_eq!(response.body["data"]["current_version"], 1);
}

#[tokio::test]
async fn test_delete_then_second_delete_is_404() {
    let app = TestApp::new();
    let asset = app.create_asset("Disposable", "Body").await;
    let id = asset["id"].as_str().unwrap();

    let first = app
        .request("DELETE", &format!("/api/assets/{id}"), None)
        .await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);

    let fetch = app.request("GET", &format!("/api/assets/{id}"), None).await;
    assert_eq!(fetch.status, StatusCode::NOT_FOUND);

    let second = app
        .request("DELETE", &format!("/api/assets/{id}"), None)
        .await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_assets_filters_by_status() {
    let app = TestApp::new();
    app.create_asset("Draft one", "a").await;
    app.create_asset("Draft two", "b").await;

    let all = app.request("GET", "/api/assets", None).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["data"]["total_items"], 2);

    let published = app
        .request("GET", "/api/assets?status=published", None)
        .await;
    assert_eq!(published.status, StatusCode::OK);
    assert_eq!(published.body["data"]["total_items"], 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
