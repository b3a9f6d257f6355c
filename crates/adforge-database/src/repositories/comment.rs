//! Comment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use adforge_core::error::{AppError, ErrorKind};
use adforge_core::result::AppResult;
use adforge_entity::comment::{Comment, CreateComment};

use crate::store::CommentStore;

/// Repository for asset comments.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for CommentRepository {
    async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        let comment = Comment::from_create(data);

        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (id, asset_id, content, created_by, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(comment.id)
        .bind(comment.asset_id)
        .bind(&comment.content)
        .bind(comment.created_by)
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }

    async fn list_by_asset(&self, asset_id: Uuid) -> AppResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE asset_id = $1 ORDER BY created_at ASC",
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }
}
