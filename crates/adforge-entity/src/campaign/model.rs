//! Campaign entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A grouping of related marketing assets.
///
/// Campaigns are opaque from the asset lifecycle's perspective; assets hold
/// an optional `campaign_id` reference and nothing more.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Campaign {
    /// Unique campaign identifier.
    pub id: Uuid,
    /// Campaign name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// The user who created the campaign.
    pub created_by: Uuid,
    /// When the campaign was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCampaign {
    /// Campaign name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Creating user.
    pub created_by: Uuid,
}

impl Campaign {
    /// Build a fresh campaign from creation data.
    pub fn from_create(data: &CreateCampaign) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            description: data.description.clone(),
            created_by: data.created_by,
            created_at: Utc::now(),
        }
    }
}
