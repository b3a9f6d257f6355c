//! Asset CRUD, version history, and comment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use adforge_entity::asset::{Asset, AssetFilter, AssetStatus, VersionEntry};
use adforge_entity::comment::Comment;

use crate::dto::request::{CreateAssetRequest, CreateCommentRequest, UpdateAssetRequest};
use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Filter query parameters for asset listing.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AssetFilterParams {
    /// Only assets in this campaign.
    pub campaign_id: Option<Uuid>,
    /// Only assets in this status.
    pub status: Option<AssetStatus>,
}

/// POST /api/assets
pub async fn create_asset(
    State(state): State<AppState>,
    Json(body): Json<CreateAssetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Asset>>), ApiError> {
    body.validate().map_err(|e| validation_error(&e))?;

    let asset = state.asset_service.create(body.into_create()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(asset))))
}

/// GET /api/assets
pub async fn list_assets(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<AssetFilterParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = params.into_page_request();
    let filter = AssetFilter {
        campaign_id: filter.campaign_id,
        status: filter.status,
    };

    let result = state.asset_service.list(filter, page).await?;

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

/// GET /api/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Asset>>, ApiError> {
    let asset = state.asset_service.get(id).await?;
    Ok(Json(ApiResponse::ok(asset)))
}

/// PATCH /api/assets/{id}
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAssetRequest>,
) -> Result<Json<ApiResponse<Asset>>, ApiError> {
    body.validate().map_err(|e| validation_error(&e))?;

    let asset = state.asset_service.update(id, body.into_update()).await?;
    Ok(Json(ApiResponse::ok(asset)))
}

/// DELETE /api/assets/{id}
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.asset_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/assets/{id}/versions
pub async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<VersionEntry>>>, ApiError> {
    let versions = state.asset_service.list_versions(id).await?;
    Ok(Json(ApiResponse::ok(versions)))
}

/// POST /api/assets/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Comment>>), ApiError> {
    body.validate().map_err(|e| validation_error(&e))?;

    let comment = state.comment_service.create(body.into_create(id)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment))))
}

/// GET /api/assets/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Comment>>>, ApiError> {
    let comments = state.comment_service.list(id).await?;
    Ok(Json(ApiResponse::ok(comments)))
}
