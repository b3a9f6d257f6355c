//! Content analysis and draft generation.
//!
//! Thin orchestration over the [`ContentAnalyzer`] capability. Analysis is
//! read-only with respect to asset state: the caller passes raw content,
//! which may be an unsaved draft buffer.

use std::sync::Arc;

use tracing::info;

use adforge_core::result::AppResult;
use adforge_core::traits::analyzer::ContentAnalyzer;
use adforge_core::types::analysis::{AnalysisReport, DraftBrief};

/// Runs content through the configured analyzer provider.
#[derive(Clone)]
pub struct AnalysisService {
    analyzer: Arc<dyn ContentAnalyzer>,
}

impl AnalysisService {
    /// Creates a new analysis service.
    pub fn new(analyzer: Arc<dyn ContentAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Analyzes a piece of content. Does not touch any stored asset.
    pub async fn analyze(&self, content: &str) -> AppResult<AnalysisReport> {
        let report = self.analyzer.analyze(content).await?;
        info!(
            readability = report.readability_score,
            suggestions = report.suggestions.len(),
            "Content analyzed"
        );
        Ok(report)
    }

    /// Generates a content draft from a brief.
    pub async fn generate_draft(&self, brief: &DraftBrief) -> AppResult<String> {
        let draft = self.analyzer.generate_draft(brief).await?;
        info!(kind = %brief.kind, "Draft generated");
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_analyzer::StubAnalyzer;
    use adforge_core::config::analyzer::AnalyzerConfig;

    #[tokio::test]
    async fn test_analyze_returns_a_complete_report() {
        let svc = AnalysisService::new(Arc::new(StubAnalyzer::new(&AnalyzerConfig::default())));
        let report = svc
            .analyze("Sign up today and enjoy our service.")
            .await
            .unwrap();
        assert!(report.readability_score <= 100);
        assert_eq!(report.tone.values().map(|v| *v as u32).sum::<u32>(), 100);
    }
}
