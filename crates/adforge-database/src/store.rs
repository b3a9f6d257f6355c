//! Store traits implemented by the Postgres repositories and the in-memory
//! stores.
//!
//! Services depend on these traits, never on a concrete backend, so the
//! same service wiring runs against PostgreSQL in production and against
//! the in-memory stores in tests.

use async_trait::async_trait;
use uuid::Uuid;

use adforge_core::result::AppResult;
use adforge_core::types::pagination::{PageRequest, PageResponse};
use adforge_entity::asset::{Asset, AssetFilter, CreateAsset};
use adforge_entity::campaign::{Campaign, CreateCampaign};
use adforge_entity::comment::{Comment, CreateComment};

/// Persistence operations for assets and their embedded version history.
#[async_trait]
pub trait AssetStore: Send + Sync + 'static {
    /// Persist a new asset; version 1 is recorded from the initial content.
    async fn create(&self, data: &CreateAsset) -> AppResult<Asset>;

    /// Find an asset by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Asset>>;

    /// List assets, newest-updated first, with optional filters.
    async fn list(
        &self,
        filter: &AssetFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Asset>>;

    /// Write back a mutated asset.
    ///
    /// The write only succeeds while the stored row still carries
    /// `expected_version`; a stale token yields a Conflict error. This is
    /// the optimistic-lock point for the whole save path.
    async fn update(&self, asset: &Asset, expected_version: i32) -> AppResult<Asset>;

    /// Delete an asset and, implicitly, its history. Returns `true` if a
    /// row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Persistence operations for campaigns.
#[async_trait]
pub trait CampaignStore: Send + Sync + 'static {
    /// Persist a new campaign.
    async fn create(&self, data: &CreateCampaign) -> AppResult<Campaign>;

    /// Find a campaign by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Campaign>>;

    /// List campaigns, newest first.
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Campaign>>;
}

/// Persistence operations for asset comments.
#[async_trait]
pub trait CommentStore: Send + Sync + 'static {
    /// Persist a new comment.
    async fn create(&self, data: &CreateComment) -> AppResult<Comment>;

    /// List all comments on an asset, oldest first.
    async fn list_by_asset(&self, asset_id: Uuid) -> AppResult<Vec<Comment>>;
}
