//! The content analyzer capability trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::analysis::{AnalysisReport, DraftBrief};

/// Scores marketing copy and drafts new copy from a brief.
///
/// Implementations may call a remote NLP/LLM service or compute heuristics
/// locally; callers only depend on the output shapes. Both operations are
/// pure request/response calls with no side effects on persisted state.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync + 'static {
    /// Analyze raw text and return readability/tone/suggestion metadata.
    async fn analyze(&self, content: &str) -> AppResult<AnalysisReport>;

    /// Generate a draft body from a brief.
    async fn generate_draft(&self, brief: &DraftBrief) -> AppResult<String>;
}
