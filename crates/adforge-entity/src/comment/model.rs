//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A collaboration comment attached to an asset.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The asset this comment belongs to.
    pub asset_id: Uuid,
    /// Comment body.
    pub content: String,
    /// The commenting user.
    pub created_by: Uuid,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// The asset to comment on.
    pub asset_id: Uuid,
    /// Comment body; the only constraint is non-empty.
    pub content: String,
    /// Commenting user.
    pub created_by: Uuid,
}

impl Comment {
    /// Build a fresh comment from creation data.
    pub fn from_create(data: &CreateComment) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_id: data.asset_id,
            content: data.content.clone(),
            created_by: data.created_by,
            created_at: Utc::now(),
        }
    }
}
