//! Asset entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::AssetKind;
use super::status::AssetStatus;
use super::version::VersionEntry;

/// A marketing asset with one live body and an embedded, append-only
/// version history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Asset {
    /// Unique asset identifier, server-assigned.
    pub id: Uuid,
    /// Asset name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// What kind of marketing content this is.
    pub kind: AssetKind,
    /// Current live content body.
    pub content: String,
    /// Workflow status.
    pub status: AssetStatus,
    /// Optional campaign this asset belongs to.
    pub campaign_id: Option<Uuid>,
    /// Intended audience descriptor, also fed to the analyzer.
    pub target_audience: Option<String>,
    /// Tone-of-voice descriptor.
    pub tone: Option<String>,
    /// Brand style descriptor.
    pub brand_style: Option<String>,
    /// Version token; equals the highest version number in the history.
    pub current_version: i32,
    /// Append-only content snapshots, oldest first.
    #[sqlx(json)]
    pub version_history: Vec<VersionEntry>,
    /// The user who created the asset.
    pub created_by: Uuid,
    /// When the asset was created.
    pub created_at: DateTime<Utc>,
    /// When the asset was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsset {
    /// Asset name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Asset kind.
    pub kind: AssetKind,
    /// Initial content body (may be empty).
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

/// Partial update for an existing asset.
///
/// `base_version` is the optimistic-lock token: when present, the update is
/// refused unless it equals the asset's `current_version` at write time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAsset {
    /// New name.
    pub name: Option<String>,
    /// New description.
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
    /// Version token the client last saw.
    pub base_version: Option<i32>,
}

impl UpdateAsset {
    /// An update that only replaces the content body.
    pub fn content_only(content: impl Into<String>, base_version: Option<i32>) -> Self {
        Self {
            content: Some(content.into()),
            base_version,
            ..Self::default()
        }
    }
}

/// Filter options for asset listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetFilter {
    /// Only assets in this campaign.
    pub campaign_id: Option<Uuid>,
    /// Only assets in this status.
    pub status: Option<AssetStatus>,
}

impl Asset {
    /// Build a fresh asset from creation data.
    ///
    /// The initial content is recorded as version 1 so that history is
    /// never empty for a persisted asset.
    pub fn from_create(data: &CreateAsset) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            description: data.description.clone(),
            kind: data.kind,
            content: data.content.clone(),
            status: data.status.unwrap_or_default(),
            campaign_id: data.campaign_id,
            target_audience: data.target_audience.clone(),
            tone: data.tone.clone(),
            brand_style: data.brand_style.clone(),
            current_version: 1,
            version_history: vec![VersionEntry {
                version: 1,
                content: data.content.clone(),
                timestamp: now,
            }],
            created_by: data.created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place.
    ///
    /// A content change appends exactly one version entry and bumps
    /// `current_version`; identical content appends nothing. Returns `true`
    /// if the content body changed.
    pub fn apply_update(&mut self, update: &UpdateAsset) -> bool {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(campaign_id) = update.campaign_id {
            self.campaign_id = Some(campaign_id);
        }
        if let Some(target_audience) = &update.target_audience {
            self.target_audience = Some(target_audience.clone());
        }
        if let Some(tone) = &update.tone {
            self.tone = Some(tone.clone());
        }
        if let Some(brand_style) = &update.brand_style {
            self.brand_style = Some(brand_style.clone());
        }

        let mut content_changed = false;
        if let Some(content) = &update.content {
            if *content != self.content {
                let next = self.current_version + 1;
                self.version_history
                    .push(VersionEntry::now(next, content.clone()));
                self.current_version = next;
                self.content = content.clone();
                content_changed = true;
            }
        }

        self.updated_at = Utc::now();
        content_changed
    }

    /// Find a historical snapshot by version number.
    pub fn find_version(&self, version: i32) -> Option<&VersionEntry> {
        self.version_history.iter().find(|v| v.version == version)
    }

    /// The most recent version entry, if any history exists.
    pub fn latest_version(&self) -> Option<&VersionEntry> {
        self.version_history.last()
    }
}
