//! Campaign management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use adforge_core::error::AppError;
use adforge_core::result::AppResult;
use adforge_core::types::pagination::{PageRequest, PageResponse};
use adforge_database::store::CampaignStore;
use adforge_entity::campaign::{Campaign, CreateCampaign};

/// Manages campaigns.
#[derive(Clone)]
pub struct CampaignService {
    store: Arc<dyn CampaignStore>,
}

impl CampaignService {
    /// Creates a new campaign service.
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self { store }
    }

    /// Creates a campaign.
    pub async fn create(&self, data: CreateCampaign) -> AppResult<Campaign> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Campaign name must not be empty"));
        }

        let campaign = self.store.create(&data).await?;
        info!(campaign_id = %campaign.id, "Campaign created");
        Ok(campaign)
    }

    /// Fetches a campaign by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<Campaign> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Campaign {id} not found")))
    }

    /// Lists campaigns, newest first.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Campaign>> {
        self.store.list(&page).await
    }
}
