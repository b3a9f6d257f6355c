//! Content analysis and draft generation handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use adforge_core::types::analysis::DraftBrief;

use crate::dto::request::{AnalyzeRequest, GenerateRequest};
use crate::dto::response::{AnalyzeResponse, ApiResponse, GenerateResponse};
use crate::error::{ApiError, validation_error};
use crate::state::AppState;

/// POST /api/analyze
///
/// Read-only with respect to asset state; the content may be an unsaved
/// draft buffer.
pub async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalyzeResponse>>, ApiError> {
    let analysis = state.analysis_service.analyze(&body.content).await?;
    Ok(Json(ApiResponse::ok(AnalyzeResponse { analysis })))
}

/// POST /api/generate
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<ApiResponse<GenerateResponse>>, ApiError> {
    body.validate().map_err(|e| validation_error(&e))?;

    let brief = DraftBrief {
        kind: body.kind,
        topic: body.topic,
        target_audience: body.target_audience,
        tone: body.tone,
        brand_style: body.brand_style,
    };
    let content = state.analysis_service.generate_draft(&brief).await?;
    Ok(Json(ApiResponse::ok(GenerateResponse { content })))
}
