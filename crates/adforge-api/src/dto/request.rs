//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use adforge_entity::asset::{AssetKind, AssetStatus, CreateAsset, UpdateAsset};
use adforge_entity::campaign::CreateCampaign;
use adforge_entity::comment::CreateComment;

/// Create asset request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAssetRequest {
    /// Asset name.
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub name: String,
    /// Free-text description.
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
    /// Asset kind.
    pub kind: AssetKind,
    /// Initial content body.
    pub content: String,
    /// Workflow status; defaults to draft.
    pub status: Option<AssetStatus>,
    /// Campaign reference.
    pub campaign_id: Option<Uuid>,
    /// Audience descriptor.
    pub target_audience: Option<String>,
    /// Tone descriptor.
    pub tone: Option<String>,
    /// Brand style descriptor.
    pub brand_style: Option<String>,
    /// Creating user.
    pub created_by: Uuid,
}

impl CreateAssetRequest {
    /// Converts to the entity creation payload.
    pub fn into_create(self) -> CreateAsset {
        CreateAsset {
            name: self.name,
            description: self.description,
            kind: self.kind,
            content: self.content,
            status: self.status,
            campaign_id: self.campaign_id,
            target_audience: self.target_audience,
            tone: self.tone,
            brand_style: self.brand_style,
            created_by: self.created_by,
        }
    }
}

/// Partial asset update request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAssetRequest {
    /// New name.
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub name: Option<String>,
    /// New description.
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
    /// New content body; a change appends a version entry.
    pub content: Option<String>,
    /// New workflow status.
    pub status: Option<AssetStatus>,
    /// New campaign reference.
    pub campaign_id: Option<Uuid>,
    /// New audience descriptor.
    pub target_audience: Option<String>,
    /// New tone descriptor.
    pub tone: Option<String>,
    /// New brand style descriptor.
    pub brand_style: Option<String>,
    /// Version token the client last saw; enforced when present.
    pub base_version: Option<i32>,
}

impl UpdateAssetRequest {
    /// Converts to the entity update payload.
    pub fn into_update(self) -> UpdateAsset {
        UpdateAsset {
            name: self.name,
            description: self.description,
            content: self.content,
            status: self.status,
            campaign_id: self.campaign_id,
            target_audience: self.target_audience,
            tone: self.tone,
            brand_style: self.brand_style,
            base_version: self.base_version,
        }
    }
}

/// Create campaign request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCampaignRequest {
    /// Campaign name.
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    /// Free-text description.
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
    /// Creating user.
    pub created_by: Uuid,
}

impl CreateCampaignRequest {
    /// Converts to the entity creation payload.
    pub fn into_create(self) -> CreateCampaign {
        CreateCampaign {
            name: self.name,
            description: self.description,
            created_by: self.created_by,
        }
    }
}

/// Create comment request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Comment body.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    /// Commenting user.
    pub created_by: Uuid,
}

impl CreateCommentRequest {
    /// Converts to the entity creation payload for the given asset.
    pub fn into_create(self, asset_id: Uuid) -> CreateComment {
        CreateComment {
            asset_id,
            content: self.content,
            created_by: self.created_by,
        }
    }
}

/// Content analysis request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// The content to analyze; may be an unsaved draft buffer.
    pub content: String,
}

/// Draft generation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateRequest {
    /// Kind of asset to draft, as its wire name.
    #[validate(length(min = 1, message = "is required"))]
    pub kind: String,
    /// What the copy should be about.
    #[validate(length(min = 1, message = "is required"))]
    pub topic: String,
    /// Intended audience, if known.
    pub target_audience: Option<String>,
    /// Requested tone of voice.
    pub tone: Option<String>,
    /// Brand style guidelines.
    pub brand_style: Option<String>,
}
