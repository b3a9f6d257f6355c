//! Shared test helpers for integration tests.
//!
//! Builds the real Axum router over the in-memory stores and the stub
//! analyzer, so the full HTTP contract is exercised without PostgreSQL or
//! a network.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use adforge_analyzer::StubAnalyzer;
use adforge_api::AppState;
use adforge_core::config::AppConfig;
use adforge_database::memory::{MemoryAssetStore, MemoryCampaignStore, MemoryCommentStore};
use adforge_service::{AnalysisService, AssetService, CampaignService, CommentService};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// A fixed user ID for created_by fields
    pub user_id: Uuid,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null for empty bodies)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over fresh in-memory stores.
    pub fn new() -> Self {
        let config = Arc::new(AppConfig {
            server: Default::default(),
            database: Default::default(),
            analyzer: Default::default(),
            logging: Default::default(),
        });

        let asset_store = Arc::new(MemoryAssetStore::new());
        let campaign_store = Arc::new(MemoryCampaignStore::new());
        let comment_store = Arc::new(MemoryCommentStore::new());
        let analyzer = Arc::new(StubAnalyzer::new(&config.analyzer));

        let state = AppState {
            config: config.clone(),
            asset_service: Arc::new(AssetService::new(asset_store.clone())),
            campaign_service: Arc::new(CampaignService::new(campaign_store)),
            comment_service: Arc::new(CommentService::new(comment_store, asset_store)),
            analysis_service: Arc::new(AnalysisService::new(analyzer)),
        };

        Self {
            router: adforge_api::build_router(state),
            user_id: Uuid::new_v4(),
        }
    }

    /// Send a request through the router and decode the JSON response.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                builder
                    .body(Body::from(json.to_string()))
                    .expect("Failed to build request")
            }
            None => builder
                .body(Body::empty())
                .expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create an email asset and return its JSON representation.
    pub async fn create_asset(&self, name: &str, content: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/assets",
                Some(serde_json::json!({
                    "name": name,
                    "kind": "email",
                    "content": content,
                    "created_by": self.user_id,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["data"].clone()
    }
}
