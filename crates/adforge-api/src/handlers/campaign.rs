//! Campaign handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use adforge_entity::campaign::Campaign;

use crate::dto::request::CreateCampaignRequest;
use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// POST /api/campaigns
pub async fn create_campaign(
    State(state): State<AppState>,
    Json(body): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Campaign>>), ApiError> {
    body.validate().map_err(|e| validation_error(&e))?;

    let campaign = state.campaign_service.create(body.into_create()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(campaign))))
}

/// GET /api/campaigns
pub async fn list_campaigns(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .campaign_service
        .list(params.into_page_request())
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": {
            "items": result.items,
            "total_items": result.total_items,
            "page": result.page,
            "page_size": result.page_size,
            "total_pages": result.total_pages,
        }
    })))
}

/// GET /api/campaigns/{id}
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Campaign>>, ApiError> {
    let campaign = state.campaign_service.get(id).await?;
    Ok(Json(ApiResponse::ok(campaign)))
}
