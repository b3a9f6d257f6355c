//! AdForge Server — Marketing Content Management Platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use adforge_analyzer::AnalyzerEngine;
use adforge_api::AppState;
use adforge_core::config::AppConfig;
use adforge_core::error::AppError;
use adforge_database::connection::DatabasePool;
use adforge_database::repositories::{AssetRepository, CampaignRepository, CommentRepository};
use adforge_service::{AnalysisService, AssetService, CampaignService, CommentService};

#[tokio::main]
async fn main() {
    let env = std::env::var("ADFORGE_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AdForge v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    adforge_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let asset_store = Arc::new(AssetRepository::new(db.pool().clone()));
    let campaign_store = Arc::new(CampaignRepository::new(db.pool().clone()));
    let comment_store = Arc::new(CommentRepository::new(db.pool().clone()));

    // ── Step 3: Analyzer provider ────────────────────────────────
    let analyzer = Arc::new(AnalyzerEngine::from_config(&config.analyzer)?);

    // ── Step 4: Services ─────────────────────────────────────────
    let asset_service = Arc::new(AssetService::new(asset_store.clone()));
    let campaign_service = Arc::new(CampaignService::new(campaign_store));
    let comment_service = Arc::new(CommentService::new(comment_store, asset_store));
    let analysis_service = Arc::new(AnalysisService::new(analyzer));

    // ── Step 5: HTTP server ──────────────────────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        asset_service,
        campaign_service,
        comment_service,
        analysis_service,
    };
    let router = adforge_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("AdForge listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
