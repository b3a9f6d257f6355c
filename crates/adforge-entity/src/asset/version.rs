//! Asset version history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable snapshot of an asset's content at save time.
///
/// Entries live in the asset's embedded `version_history` list, appended in
/// chronological order with monotonically increasing version numbers
/// starting at 1. Nothing ever rewrites or removes an entry; restoring an
/// old version produces a new forward entry through the normal save path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Sequential version number.
    pub version: i32,
    /// The full content body at this version.
    pub content: String,
    /// When this version was recorded.
    pub timestamp: DateTime<Utc>,
}

impl VersionEntry {
    /// Create an entry stamped with the current time.
    pub fn now(version: i32, content: impl Into<String>) -> Self {
        Self {
            version,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
