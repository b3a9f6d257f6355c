//! HTTP adapter for a remote analysis service.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use adforge_core::config::analyzer::AnalyzerConfig;
use adforge_core::error::{AppError, ErrorKind};
use adforge_core::result::AppResult;
use adforge_core::traits::analyzer::ContentAnalyzer;
use adforge_core::types::analysis::{AnalysisReport, DraftBrief};

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    analysis: AnalysisReport,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    content: String,
}

/// [`ContentAnalyzer`] backed by a remote HTTP service.
///
/// Posts to `{base_url}/analyze` and `{base_url}/generate`. Any transport
/// failure, non-success status, or malformed body surfaces as an
/// `ExternalService` error.
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalyzer {
    /// Build an analyzer client from configuration.
    pub fn new(config: &AnalyzerConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build analyzer HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> AppResult<R>
    where
        B: Serialize + Sync,
        R: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "calling analyzer service");

        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Analyzer service request to {path} failed"),
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Analyzer service returned {status} for {path}"
            )));
        }

        response.json::<R>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Analyzer service returned a malformed body for {path}"),
                e,
            )
        })
    }
}

#[async_trait]
impl ContentAnalyzer for HttpAnalyzer {
    async fn analyze(&self, content: &str) -> AppResult<AnalysisReport> {
        let response: AnalyzeResponse = self
            .post_json("/analyze", &AnalyzeRequest { content })
            .await?;
        Ok(response.analysis.clamped())
    }

    async fn generate_draft(&self, brief: &DraftBrief) -> AppResult<String> {
        let response: GenerateResponse = self.post_json("/generate", brief).await?;
        Ok(response.content)
    }
}
