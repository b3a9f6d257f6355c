//! Campaign repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use adforge_core::error::{AppError, ErrorKind};
use adforge_core::result::AppResult;
use adforge_core::types::pagination::{PageRequest, PageResponse};
use adforge_entity::campaign::{Campaign, CreateCampaign};

use crate::store::CampaignStore;

/// Repository for campaign CRUD.
#[derive(Debug, Clone)]
pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    /// Create a new campaign repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampaignStore for CampaignRepository {
    async fn create(&self, data: &CreateCampaign) -> AppResult<Campaign> {
        let campaign = Campaign::from_create(data);

        sqlx::query_as::<_, Campaign>(
            "INSERT INTO campaigns (id, name, description, created_by, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(campaign.id)
        .bind(&campaign.name)
        .bind(&campaign.description)
        .bind(campaign.created_by)
        .bind(campaign.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create campaign", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Campaign>> {
        sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find campaign", e))
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Campaign>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM campaigns")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count campaigns", e)
            })?;

        let campaigns = sqlx::query_as::<_, Campaign>(
            "SELECT * FROM campaigns ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list campaigns", e))?;

        Ok(PageResponse::new(
            campaigns,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
