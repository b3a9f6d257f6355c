//! Asset lifecycle — create, read, update with version tracking, delete.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use adforge_core::error::AppError;
use adforge_core::result::AppResult;
use adforge_core::types::pagination::{PageRequest, PageResponse};
use adforge_database::store::AssetStore;
use adforge_entity::asset::{Asset, AssetFilter, CreateAsset, UpdateAsset, VersionEntry};

/// Bounds on user-supplied asset fields.
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 500;

/// Manages the asset lifecycle and its embedded version history.
#[derive(Clone)]
pub struct AssetService {
    store: Arc<dyn AssetStore>,
}

impl AssetService {
    /// Creates a new asset service.
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Creates an asset. The initial content becomes version 1.
    pub async fn create(&self, data: CreateAsset) -> AppResult<Asset> {
        validate_name(&data.name)?;
        validate_description(data.description.as_deref())?;

        let asset = self.store.create(&data).await?;

        info!(
            asset_id = %asset.id,
            kind = %asset.kind,
            created_by = %asset.created_by,
            "Asset created"
        );
        Ok(asset)
    }

    /// Fetches an asset, including its full version history.
    pub async fn get(&self, id: Uuid) -> AppResult<Asset> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))
    }

    /// Lists assets, newest-updated first.
    pub async fn list(
        &self,
        filter: AssetFilter,
        page: PageRequest,
    ) -> AppResult<PageResponse<Asset>> {
        self.store.list(&filter, &page).await
    }

    /// Applies a partial update.
    ///
    /// A content change appends exactly one version entry. When the update
    /// carries a `base_version` token, the write is refused with a Conflict
    /// unless the stored row still carries that version; without a token
    /// the last write wins. The store enforces the token again at the row
    /// level, so a concurrent writer between our read and our write is
    /// still caught.
    pub async fn update(&self, id: Uuid, update: UpdateAsset) -> AppResult<Asset> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        validate_description(update.description.as_deref())?;

        let mut asset = self.get(id).await?;

        if let Some(base) = update.base_version {
            if base != asset.current_version {
                return Err(AppError::conflict(format!(
                    "Asset {id} is at version {}, but the update was based on version {base}",
                    asset.current_version
                )));
            }
        }

        let expected = asset.current_version;
        let content_changed = asset.apply_update(&update);

        let saved = self.store.update(&asset, expected).await?;

        info!(
            asset_id = %id,
            version = saved.current_version,
            content_changed,
            "Asset updated"
        );
        Ok(saved)
    }

    /// Deletes an asset and its history. A second delete of the same ID is
    /// a NotFound, not a silent success.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.store.delete(id).await?;
        if !removed {
            return Err(AppError::not_found(format!("Asset {id} not found")));
        }
        info!(asset_id = %id, "Asset deleted");
        Ok(())
    }

    /// Returns the asset's version history, newest first, for display.
    pub async fn list_versions(&self, id: Uuid) -> AppResult<Vec<VersionEntry>> {
        let asset = self.get(id).await?;
        let mut versions = asset.version_history;
        versions.reverse();
        Ok(versions)
    }
}

fn validate_name(name: &str) -> AppResult<()> {
    let len = name.trim().chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&len) {
        return Err(AppError::validation(format!(
            "Asset name must be between {NAME_MIN} and {NAME_MAX} characters"
        )));
    }
    Ok(())
}

fn validate_description(description: Option<&str>) -> AppResult<()> {
    if let Some(desc) = description {
        if desc.chars().count() > DESCRIPTION_MAX {
            return Err(AppError::validation(format!(
                "Asset description must be at most {DESCRIPTION_MAX} characters"
            )));
        }
    }
    Ok(())
}
