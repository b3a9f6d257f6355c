//! Integration tests for content analysis and draft generation.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_analyze_returns_a_complete_report() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/analyze",
            Some(json!({ "content": "Sign up today and enjoy our service. You will love it." })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let analysis = &response.body["data"]["analysis"];
    let score = analysis["readability_score"].as_u64().unwrap();
    assert!(score <= 100);

    let tone_total: u64 = analysis["tone"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(tone_total, 100);
    assert!(analysis["strengths"].is_array());
    assert!(analysis["suggestions"].is_array());
}

#[tokio::test]
async fn test_analyze_is_read_only() {
    let app = TestApp::new();
    let asset = app.create_asset("Analyzed", "Original body").await;
    let id = asset["id"].as_str().unwrap();

    // Analyzing an unsaved draft buffer leaves the stored asset untouched.
    let response = app
        .request(
            "POST",
            "/api/analyze",
            Some(json!({ "content": "Totally different unsaved draft" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let fetched = app.request("GET", &format!("/api/assets/{id}"), None).await;
    assert_eq!(fetched.body["data"]["content"], "Original body");
    assert_eq!(fetched.body["data"]["current_version"], 1);
}

#[tokio::test]
async fn test_generate_produces_content_mentioning_topic() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/generate",
            Some(json!({
                "kind": "email",
                "topic": "Spring sale",
                "target_audience": "returning customers",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let content = response.body["data"]["content"].as_str().unwrap();
    assert!(content.contains("Spring sale"));
}

#[tokio::test]
async fn test_generate_requires_a_topic() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/generate",
            Some(json!({ "kind": "email", "topic": "" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
