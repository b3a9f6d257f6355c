//! Version history display projection.

use chrono::{DateTime, Utc};

use adforge_entity::asset::VersionEntry;

/// Default preview length before truncation.
pub const DEFAULT_PREVIEW_CHARS: usize = 120;

/// Marker rendered when an asset has no history.
pub const EMPTY_HISTORY_MARKER: &str = "No versions yet";

/// One row in the history tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// Version number.
    pub version: i32,
    /// Content preview, truncated with an ellipsis if over the threshold.
    pub preview: String,
    /// When this version was saved.
    pub timestamp: DateTime<Utc>,
}

/// Read-only, display-ordered view of an asset's version history.
#[derive(Debug, Clone, Default)]
pub struct HistoryProjection {
    items: Vec<HistoryItem>,
}

impl HistoryProjection {
    /// Project version entries into display rows, newest first.
    pub fn new(entries: &[VersionEntry], preview_chars: usize) -> Self {
        let items = entries
            .iter()
            .rev()
            .map(|entry| HistoryItem {
                version: entry.version,
                preview: truncate(&entry.content, preview_chars),
                timestamp: entry.timestamp,
            })
            .collect();
        Self { items }
    }

    /// Project with the default preview length.
    pub fn with_defaults(entries: &[VersionEntry]) -> Self {
        Self::new(entries, DEFAULT_PREVIEW_CHARS)
    }

    /// The display rows, newest first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    /// Whether there is anything to show.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The text to render when the projection is empty.
    pub fn empty_marker(&self) -> &'static str {
        EMPTY_HISTORY_MARKER
    }
}

/// Truncate on a character boundary, appending an ellipsis.
fn truncate(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let mut preview: String = content.chars().take(max_chars).collect();
    preview.push('…');
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(version: i32, content: &str) -> VersionEntry {
        VersionEntry {
            version,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_items_are_newest_first() {
        let projection =
            HistoryProjection::with_defaults(&[entry(1, "a"), entry(2, "b"), entry(3, "c")]);
        let versions: Vec<i32> = projection.items().iter().map(|i| i.version).collect();
        assert_eq!(versions, vec![3, 2, 1]);
    }

    #[test]
    fn test_long_content_is_truncated_with_ellipsis() {
        let projection = HistoryProjection::new(&[entry(1, "abcdefghij")], 4);
        assert_eq!(projection.items()[0].preview, "abcd…");
    }

    #[test]
    fn test_truncation_respects_multibyte_boundaries() {
        let projection = HistoryProjection::new(&[entry(1, "ünïcödé text")], 6);
        assert_eq!(projection.items()[0].preview, "ünïcöd…");
    }

    #[test]
    fn test_short_content_is_untouched() {
        let projection = HistoryProjection::with_defaults(&[entry(1, "short")]);
        assert_eq!(projection.items()[0].preview, "short");
    }

    #[test]
    fn test_empty_history_has_a_marker() {
        let projection = HistoryProjection::with_defaults(&[]);
        assert!(projection.is_empty());
        assert_eq!(projection.empty_marker(), EMPTY_HISTORY_MARKER);
    }
}
