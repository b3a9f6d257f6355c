//! Asset repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use adforge_core::error::{AppError, ErrorKind};
use adforge_core::result::AppResult;
use adforge_core::types::pagination::{PageRequest, PageResponse};
use adforge_entity::asset::{Asset, AssetFilter, CreateAsset};

use crate::store::AssetStore;

/// Repository for asset CRUD and version-history persistence.
///
/// The version history is a JSONB column on the asset row, so every read
/// returns the full history and the content-save append happens in the
/// same guarded UPDATE that bumps `current_version`.
#[derive(Debug, Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    /// Create a new asset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetStore for AssetRepository {
    async fn create(&self, data: &CreateAsset) -> AppResult<Asset> {
        let asset = Asset::from_create(data);

        sqlx::query_as::<_, Asset>(
            "INSERT INTO assets (id, name, description, kind, content, status, campaign_id, \
             target_audience, tone, brand_style, current_version, version_history, created_by, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING *",
        )
        .bind(asset.id)
        .bind(&asset.name)
        .bind(&asset.description)
        .bind(asset.kind)
        .bind(&asset.content)
        .bind(asset.status)
        .bind(asset.campaign_id)
        .bind(&asset.target_audience)
        .bind(&asset.tone)
        .bind(&asset.brand_style)
        .bind(asset.current_version)
        .bind(Json(&asset.version_history))
        .bind(asset.created_by)
        .bind(asset.created_at)
        .bind(asset.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create asset", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Asset>> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find asset", e))
    }

    async fn list(
        &self,
        filter: &AssetFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Asset>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM assets \
             WHERE ($1::uuid IS NULL OR campaign_id = $1) \
             AND ($2::asset_status IS NULL OR status = $2)",
        )
        .bind(filter.campaign_id)
        .bind(filter.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count assets", e))?;

        let assets = sqlx::query_as::<_, Asset>(
            "SELECT * FROM assets \
             WHERE ($1::uuid IS NULL OR campaign_id = $1) \
             AND ($2::asset_status IS NULL OR status = $2) \
             ORDER BY updated_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(filter.campaign_id)
        .bind(filter.status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list assets", e))?;

        Ok(PageResponse::new(
            assets,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn update(&self, asset: &Asset, expected_version: i32) -> AppResult<Asset> {
        let updated = sqlx::query_as::<_, Asset>(
            "UPDATE assets SET name = $3, description = $4, content = $5, status = $6, \
             campaign_id = $7, target_audience = $8, tone = $9, brand_style = $10, \
             current_version = $11, version_history = $12, updated_at = $13 \
             WHERE id = $1 AND current_version = $2 RETURNING *",
        )
        .bind(asset.id)
        .bind(expected_version)
        .bind(&asset.name)
        .bind(&asset.description)
        .bind(&asset.content)
        .bind(asset.status)
        .bind(asset.campaign_id)
        .bind(&asset.target_audience)
        .bind(&asset.tone)
        .bind(&asset.brand_style)
        .bind(asset.current_version)
        .bind(Json(&asset.version_history))
        .bind(asset.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update asset", e))?;

        match updated {
            Some(asset) => Ok(asset),
            // Zero rows: either the asset is gone or someone saved first.
            None => {
                let exists = self.find_by_id(asset.id).await?.is_some();
                if exists {
                    Err(AppError::conflict(format!(
                        "Asset {} was modified concurrently",
                        asset.id
                    )))
                } else {
                    Err(AppError::not_found(format!("Asset {} not found", asset.id)))
                }
            }
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete asset", e))?;
        Ok(result.rows_affected() > 0)
    }
}
