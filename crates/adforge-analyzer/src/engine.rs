//! Provider selection for the analyzer capability.

use async_trait::async_trait;
use tracing::info;

use adforge_core::config::analyzer::AnalyzerConfig;
use adforge_core::error::AppError;
use adforge_core::result::AppResult;
use adforge_core::traits::analyzer::ContentAnalyzer;
use adforge_core::types::analysis::{AnalysisReport, DraftBrief};

use crate::http::HttpAnalyzer;
use crate::stub::StubAnalyzer;

/// Configuration-selected analyzer provider.
#[derive(Debug, Clone)]
pub enum AnalyzerEngine {
    /// In-process heuristic analyzer.
    Stub(StubAnalyzer),
    /// Remote HTTP analyzer service.
    Http(HttpAnalyzer),
}

impl AnalyzerEngine {
    /// Build the provider named by `config.provider`.
    ///
    /// Rejects unknown provider names at startup rather than at the first
    /// request.
    pub fn from_config(config: &AnalyzerConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "stub" => {
                info!(
                    latency_ms = config.simulated_latency_ms,
                    "using stub analyzer provider"
                );
                Ok(Self::Stub(StubAnalyzer::new(config)))
            }
            "http" => {
                info!(base_url = %config.base_url, "using http analyzer provider");
                Ok(Self::Http(HttpAnalyzer::new(config)?))
            }
            other => Err(AppError::configuration(format!(
                "Unknown analyzer provider '{other}' (expected 'stub' or 'http')"
            ))),
        }
    }
}

#[async_trait]
impl ContentAnalyzer for AnalyzerEngine {
    async fn analyze(&self, content: &str) -> AppResult<AnalysisReport> {
        match self {
            Self::Stub(inner) => inner.analyze(content).await,
            Self::Http(inner) => inner.analyze(content).await,
        }
    }

    async fn generate_draft(&self, brief: &DraftBrief) -> AppResult<String> {
        match self {
            Self::Stub(inner) => inner.generate_draft(brief).await,
            Self::Http(inner) => inner.generate_draft(brief).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::error::ErrorKind;

    #[test]
    fn test_unknown_provider_is_rejected() {
        let config = AnalyzerConfig {
            provider: "telepathy".to_string(),
            ..AnalyzerConfig::default()
        };
        let err = AnalyzerEngine::from_config(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_default_config_selects_stub() {
        let engine = AnalyzerEngine::from_config(&AnalyzerConfig::default()).unwrap();
        assert!(matches!(engine, AnalyzerEngine::Stub(_)));
    }
}
