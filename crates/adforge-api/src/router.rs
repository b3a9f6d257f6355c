//! Route definitions for the AdForge HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use http::{HeaderValue, Method};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(asset_routes())
        .merge(campaign_routes())
        .merge(analysis_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Asset CRUD, version history, and comments
fn asset_routes() -> Router<AppState> {
    Router::new()
        .route("/assets", post(handlers::asset::create_asset))
        .route("/assets", get(handlers::asset::list_assets))
        .route("/assets/{id}", get(handlers::asset::get_asset))
        .route("/assets/{id}", patch(handlers::asset::update_asset))
        .route("/assets/{id}", delete(handlers::asset::delete_asset))
        .route("/assets/{id}/versions", get(handlers::asset::list_versions))
        .route(
            "/assets/{id}/comments",
            post(handlers::asset::create_comment),
        )
        .route("/assets/{id}/comments", get(handlers::asset::list_comments))
}

/// Campaign CRUD
fn campaign_routes() -> Router<AppState> {
    Router::new()
        .route("/campaigns", post(handlers::campaign::create_campaign))
        .route("/campaigns", get(handlers::campaign::list_campaigns))
        .route("/campaigns/{id}", get(handlers::campaign::get_campaign))
}

/// Content analysis and draft generation
fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(handlers::analysis::analyze))
        .route("/generate", post(handlers::analysis::generate))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let origins = if cors_config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            cors_config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(Any)
        .max_age(Duration::from_secs(cors_config.max_age_seconds))
}
