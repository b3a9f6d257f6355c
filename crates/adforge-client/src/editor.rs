//! Editor state machine.
//!
//! Tracks one asset's draft buffer against its last-saved content.
//! Phases: `Viewing` (buffer matches saved content), `Dirty` (unsaved
//! edits), `Saving` (a save request is in flight). Saves are rejected
//! while one is in flight; a failed save returns to `Dirty` with the
//! error surfaced as a value.

use std::sync::Arc;

use tracing::debug;

use adforge_core::error::AppError;
use adforge_core::result::AppResult;
use adforge_core::types::analysis::AnalysisReport;
use adforge_entity::asset::{Asset, UpdateAsset};

use crate::backend::AssetBackend;

/// Where the editor is in its edit/save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// Buffer matches the last-saved content.
    Viewing,
    /// Unsaved edits exist.
    Dirty,
    /// A save request is in flight.
    Saving,
}

/// An editing session over one asset.
pub struct EditorSession {
    backend: Arc<dyn AssetBackend>,
    asset: Asset,
    buffer: String,
    phase: EditorPhase,
}

impl EditorSession {
    /// Open a session on an already-fetched asset.
    pub fn new(backend: Arc<dyn AssetBackend>, asset: Asset) -> Self {
        let buffer = asset.content.clone();
        Self {
            backend,
            asset,
            buffer,
            phase: EditorPhase::Viewing,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// The current draft buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The last asset state received from the server.
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Replace the draft buffer.
    ///
    /// The session is Dirty exactly when the buffer differs from the
    /// last-saved content; editing back to the saved text returns to
    /// Viewing.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        if self.phase != EditorPhase::Saving {
            self.phase = if self.buffer == self.asset.content {
                EditorPhase::Viewing
            } else {
                EditorPhase::Dirty
            };
        }
    }

    /// Persist the draft buffer.
    ///
    /// A clean buffer saves nothing and sends no request. On success the
    /// server-returned asset replaces the cached one, so version numbers
    /// are never synthesized locally. On failure the phase returns to
    /// Dirty and the error is returned.
    pub async fn save(&mut self) -> AppResult<()> {
        if self.phase == EditorPhase::Saving {
            return Err(AppError::conflict("A save is already in flight"));
        }
        if self.buffer == self.asset.content {
            debug!(asset_id = %self.asset.id, "buffer clean, skipping save");
            return Ok(());
        }

        self.phase = EditorPhase::Saving;
        let update =
            UpdateAsset::content_only(self.buffer.clone(), Some(self.asset.current_version));

        match self.backend.update_asset(self.asset.id, &update).await {
            Ok(saved) => {
                self.asset = saved;
                self.phase = EditorPhase::Viewing;
                Ok(())
            }
            Err(err) => {
                self.phase = EditorPhase::Dirty;
                Err(err)
            }
        }
    }

    /// Copy a historical snapshot into the draft buffer.
    ///
    /// Forces the session Dirty and never touches the server; persistence
    /// goes through the normal [`save`](Self::save) path. Jumping to an
    /// older version while edits are pending is permitted.
    pub fn restore(&mut self, version: i32) -> AppResult<()> {
        let snapshot = self
            .asset
            .find_version(version)
            .ok_or_else(|| AppError::not_found(format!("Version {version} does not exist")))?;

        self.buffer = snapshot.content.clone();
        self.phase = EditorPhase::Dirty;
        Ok(())
    }

    /// Analyze the current buffer, saved or not. Read-only with respect
    /// to asset and editor state.
    pub async fn analyze(&self) -> AppResult<AnalysisReport> {
        self.backend.analyze(&self.buffer).await
    }
}
