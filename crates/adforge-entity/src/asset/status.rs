//! Asset workflow status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status of a marketing asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AssetStatus {
    /// Being worked on; the default for new assets.
    Draft,
    /// Submitted for team review.
    InReview,
    /// Approved and live.
    Published,
}

impl AssetStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InReview => "in-review",
            Self::Published => "published",
        }
    }
}

impl Default for AssetStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = adforge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "in-review" => Ok(Self::InReview),
            "published" => Ok(Self::Published),
            _ => Err(adforge_core::AppError::validation(format!(
                "Invalid asset status: '{s}'. Expected one of: draft, in-review, published"
            ))),
        }
    }
}
