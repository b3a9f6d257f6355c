//! Application state shared across all handlers.

use std::sync::Arc;

use adforge_core::config::AppConfig;
use adforge_service::{AnalysisService, AssetService, CampaignService, CommentService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Asset lifecycle service.
    pub asset_service: Arc<AssetService>,
    /// Campaign service.
    pub campaign_service: Arc<CampaignService>,
    /// Comment service.
    pub comment_service: Arc<CommentService>,
    /// Content analysis service.
    pub analysis_service: Arc<AnalysisService>,
}
