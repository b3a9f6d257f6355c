//! In-memory store implementations.
//!
//! Backed by DashMap, these implement the same traits as the Postgres
//! repositories and are used by the integration tests and the stub
//! deployment mode. The optimistic-lock semantics match the guarded
//! UPDATE in the Postgres implementation.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use adforge_core::error::AppError;
use adforge_core::result::AppResult;
use adforge_core::types::pagination::{PageRequest, PageResponse};
use adforge_entity::asset::{Asset, AssetFilter, CreateAsset};
use adforge_entity::campaign::{Campaign, CreateCampaign};
use adforge_entity::comment::{Comment, CreateComment};

use crate::store::{AssetStore, CampaignStore, CommentStore};

/// In-memory asset store.
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    assets: DashMap<Uuid, Asset>,
}

impl MemoryAssetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn create(&self, data: &CreateAsset) -> AppResult<Asset> {
        let asset = Asset::from_create(data);
        self.assets.insert(asset.id, asset.clone());
        Ok(asset)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Asset>> {
        Ok(self.assets.get(&id).map(|entry| entry.clone()))
    }

    async fn list(
        &self,
        filter: &AssetFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Asset>> {
        let mut matching: Vec<Asset> = self
            .assets
            .iter()
            .filter(|entry| {
                filter
                    .campaign_id
                    .is_none_or(|cid| entry.campaign_id == Some(cid))
                    && filter.status.is_none_or(|s| entry.status == s)
            })
            .map(|entry| entry.clone())
            .collect();

        matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let total = matching.len() as u64;
        let items: Vec<Asset> = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn update(&self, asset: &Asset, expected_version: i32) -> AppResult<Asset> {
        match self.assets.get_mut(&asset.id) {
            Some(mut entry) => {
                if entry.current_version != expected_version {
                    return Err(AppError::conflict(format!(
                        "Asset {} was modified concurrently",
                        asset.id
                    )));
                }
                *entry = asset.clone();
                Ok(asset.clone())
            }
            None => Err(AppError::not_found(format!("Asset {} not found", asset.id))),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.assets.remove(&id).is_some())
    }
}

/// In-memory campaign store.
#[derive(Debug, Default)]
pub struct MemoryCampaignStore {
    campaigns: DashMap<Uuid, Campaign>,
}

impl MemoryCampaignStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampaignStore for MemoryCampaignStore {
    async fn create(&self, data: &CreateCampaign) -> AppResult<Campaign> {
        let campaign = Campaign::from_create(data);
        self.campaigns.insert(campaign.id, campaign.clone());
        Ok(campaign)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Campaign>> {
        Ok(self.campaigns.get(&id).map(|entry| entry.clone()))
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Campaign>> {
        let mut all: Vec<Campaign> = self.campaigns.iter().map(|entry| entry.clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = all.len() as u64;
        let items: Vec<Campaign> = all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }
}

/// In-memory comment store.
#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    comments: DashMap<Uuid, Comment>,
}

impl MemoryCommentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        let comment = Comment::from_create(data);
        self.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn list_by_asset(&self, asset_id: Uuid) -> AppResult<Vec<Comment>> {
        let mut matching: Vec<Comment> = self
            .comments
            .iter()
            .filter(|entry| entry.asset_id == asset_id)
            .map(|entry| entry.clone())
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::error::ErrorKind;
    use adforge_entity::asset::{AssetKind, UpdateAsset};

    fn sample_create() -> CreateAsset {
        CreateAsset {
            name: "Promo".to_string(),
            description: None,
            kind: AssetKind::Email,
            content: "Hello".to_string(),
            status: None,
            campaign_id: None,
            target_audience: None,
            tone: None,
            brand_style: None,
            created_by: Uuid::new_v4(),
        }
    }

    #[tokio::test]
    async fn test_update_with_stale_version_conflicts() {
        let store = MemoryAssetStore::new();
        let asset = store.create(&sample_create()).await.unwrap();

        // First writer wins.
        let mut first = asset.clone();
        first.apply_update(&UpdateAsset::content_only("A", None));
        store.update(&first, asset.current_version).await.unwrap();

        // Second writer started from the same snapshot and must lose.
        let mut second = asset.clone();
        second.apply_update(&UpdateAsset::content_only("B", None));
        let err = store
            .update(&second, asset.current_version)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let stored = store.find_by_id(asset.id).await.unwrap().unwrap();
        assert_eq!(stored.content, "A");
        assert_eq!(stored.version_history.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_is_reported_once() {
        let store = MemoryAssetStore::new();
        let asset = store.create(&sample_create()).await.unwrap();

        assert!(store.delete(asset.id).await.unwrap());
        assert!(!store.delete(asset.id).await.unwrap());
        assert!(store.find_by_id(asset.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let store = MemoryAssetStore::new();
        store.create(&sample_create()).await.unwrap();

        let filter = AssetFilter {
            status: Some(adforge_entity::asset::AssetStatus::Published),
            ..AssetFilter::default()
        };
        let page = store.list(&filter, &PageRequest::default()).await.unwrap();
        assert!(page.items.is_empty());

        let all = store
            .list(&AssetFilter::default(), &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(all.total_items, 1);
    }
}
