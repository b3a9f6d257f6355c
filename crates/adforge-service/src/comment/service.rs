//! Collaboration comments on assets.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use adforge_core::error::AppError;
use adforge_core::result::AppResult;
use adforge_database::store::{AssetStore, CommentStore};
use adforge_entity::comment::{Comment, CreateComment};

/// Manages comments on assets.
#[derive(Clone)]
pub struct CommentService {
    store: Arc<dyn CommentStore>,
    asset_store: Arc<dyn AssetStore>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(store: Arc<dyn CommentStore>, asset_store: Arc<dyn AssetStore>) -> Self {
        Self { store, asset_store }
    }

    /// Posts a comment on an existing asset.
    pub async fn create(&self, data: CreateComment) -> AppResult<Comment> {
        if data.content.trim().is_empty() {
            return Err(AppError::validation("Comment content must not be empty"));
        }

        // Commenting on a deleted asset is a 404, not an orphan row.
        if self.asset_store.find_by_id(data.asset_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Asset {} not found",
                data.asset_id
            )));
        }

        let comment = self.store.create(&data).await?;
        info!(asset_id = %comment.asset_id, comment_id = %comment.id, "Comment posted");
        Ok(comment)
    }

    /// Lists all comments on an asset, oldest first.
    pub async fn list(&self, asset_id: Uuid) -> AppResult<Vec<Comment>> {
        if self.asset_store.find_by_id(asset_id).await?.is_none() {
            return Err(AppError::not_found(format!("Asset {asset_id} not found")));
        }
        self.store.list_by_asset(asset_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::error::ErrorKind;
    use adforge_database::memory::{MemoryAssetStore, MemoryCommentStore};
    use adforge_entity::asset::{AssetKind, CreateAsset};

    async fn setup() -> (CommentService, Uuid) {
        let assets = Arc::new(MemoryAssetStore::new());
        let asset = assets
            .create(&CreateAsset {
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
            })
            .await
            .unwrap();

        let svc = CommentService::new(Arc::new(MemoryCommentStore::new()), assets);
        (svc, asset.id)
    }

    #[tokio::test]
    async fn test_comment_on_missing_asset_is_not_found() {
        let (svc, _) = setup().await;
        let err = svc
            .create(CreateComment {
                asset_id: Uuid::new_v4(),
                content: "Nice copy".to_string(),
                created_by: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_comments_list_oldest_first() {
        let (svc, asset_id) = setup().await;
        let author = Uuid::new_v4();

        svc.create(CreateComment {
            asset_id,
            content: "first".to_string(),
            created_by: author,
        })
        .await
        .unwrap();
        svc.create(CreateComment {
            asset_id,
            content: "second".to_string(),
            created_by: author,
        })
        .await
        .unwrap();

        let comments = svc.list(asset_id).await.unwrap();
        let bodies: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_blank_comment_is_rejected() {
        let (svc, asset_id) = setup().await;
        let err = svc
            .create(CreateComment {
                asset_id,
                content: "\n".to_string(),
                created_by: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
