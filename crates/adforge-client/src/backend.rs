//! Server access for the client core.
//!
//! The editor and other client components depend on [`AssetBackend`];
//! [`HttpBackend`] is the production implementation speaking to the
//! AdForge HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use adforge_core::error::{AppError, ErrorKind};
use adforge_core::result::AppResult;
use adforge_core::types::analysis::{AnalysisReport, DraftBrief};
use adforge_entity::asset::{Asset, CreateAsset, UpdateAsset, VersionEntry};
use adforge_entity::comment::Comment;

/// Server operations the client core needs.
#[async_trait]
pub trait AssetBackend: Send + Sync + 'static {
    /// Create an asset.
    async fn create_asset(&self, data: &CreateAsset) -> AppResult<Asset>;

    /// Fetch an asset with its full history.
    async fn get_asset(&self, id: Uuid) -> AppResult<Asset>;

    /// Apply a partial update; the returned asset is the server's truth.
    async fn update_asset(&self, id: Uuid, update: &UpdateAsset) -> AppResult<Asset>;

    /// Delete an asset.
    async fn delete_asset(&self, id: Uuid) -> AppResult<()>;

    /// Fetch the version history, newest first.
    async fn list_versions(&self, id: Uuid) -> AppResult<Vec<VersionEntry>>;

    /// Fetch all comments on an asset.
    async fn list_comments(&self, id: Uuid) -> AppResult<Vec<Comment>>;

    /// Analyze a piece of content (possibly an unsaved buffer).
    async fn analyze(&self, content: &str) -> AppResult<AnalysisReport>;

    /// Generate a content draft from a brief.
    async fn generate_draft(&self, brief: &DraftBrief) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct AnalyzeBody {
    analysis: AnalysisReport,
}

#[derive(Debug, Deserialize)]
struct GenerateBody {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    message: String,
}

/// HTTP implementation of [`AssetBackend`] over reqwest.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend pointed at the given API base URL (no `/api` suffix).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Maps a server error body back to the `AppError` kind it came from.
    async fn decode_error(response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.json::<ErrorBody>().await.ok();
        let kind = match body.as_ref().map(|b| b.error.as_str()) {
            Some("NOT_FOUND") => ErrorKind::NotFound,
            Some("VALIDATION_ERROR") => ErrorKind::Validation,
            Some("CONFLICT") => ErrorKind::Conflict,
            Some("SERVICE_UNAVAILABLE") => ErrorKind::ServiceUnavailable,
            Some("EXTERNAL_SERVICE_ERROR") => ErrorKind::ExternalService,
            _ => ErrorKind::Internal,
        };
        let message = body
            .map(|b| b.message)
            .unwrap_or_else(|| format!("Server returned {status}"));
        AppError::new(kind, message)
    }

    async fn decode<T: for<'de> Deserialize<'de>>(response: reqwest::Response) -> AppResult<T> {
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Serialization, "Malformed server response", e)
        })?;
        Ok(envelope.data)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        request.send().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Request to server failed", e)
        })
    }
}

#[async_trait]
impl AssetBackend for HttpBackend {
    async fn create_asset(&self, data: &CreateAsset) -> AppResult<Asset> {
        let response = self
            .send(self.client.post(self.url("/assets")).json(data))
            .await?;
        Self::decode(response).await
    }

    async fn get_asset(&self, id: Uuid) -> AppResult<Asset> {
        let response = self
            .send(self.client.get(self.url(&format!("/assets/{id}"))))
            .await?;
        Self::decode(response).await
    }

    async fn update_asset(&self, id: Uuid, update: &UpdateAsset) -> AppResult<Asset> {
        let response = self
            .send(
                self.client
                    .patch(self.url(&format!("/assets/{id}")))
                    .json(update),
            )
            .await?;
        Self::decode(response).await
    }

    async fn delete_asset(&self, id: Uuid) -> AppResult<()> {
        let response = self
            .send(self.client.delete(self.url(&format!("/assets/{id}"))))
            .await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(())
    }

    async fn list_versions(&self, id: Uuid) -> AppResult<Vec<VersionEntry>> {
        let response = self
            .send(self.client.get(self.url(&format!("/assets/{id}/versions"))))
            .await?;
        Self::decode(response).await
    }

    async fn list_comments(&self, id: Uuid) -> AppResult<Vec<Comment>> {
        let response = self
            .send(self.client.get(self.url(&format!("/assets/{id}/comments"))))
            .await?;
        Self::decode(response).await
    }

    async fn analyze(&self, content: &str) -> AppResult<AnalysisReport> {
        let response = self
            .send(
                self.client
                    .post(self.url("/analyze"))
                    .json(&serde_json::json!({ "content": content })),
            )
            .await?;
        let body: AnalyzeBody = Self::decode(response).await?;
        Ok(body.analysis)
    }

    async fn generate_draft(&self, brief: &DraftBrief) -> AppResult<String> {
        let response = self
            .send(self.client.post(self.url("/generate")).json(brief))
            .await?;
        let body: GenerateBody = Self::decode(response).await?;
        Ok(body.content)
    }
}
