//! Persisted client session state.
//!
//! An explicit schema for the client's small persistent state, behind a
//! [`SessionStore`] trait so the storage mechanism stays swappable.

use std::collections::BTreeSet;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use adforge_core::result::AppResult;

/// Everything the client persists between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSession {
    /// Current onboarding step; 0 means onboarding not started.
    #[serde(default)]
    pub onboarding_step: u32,
    /// Names of guided tours the user has completed.
    #[serde(default)]
    pub tours_seen: BTreeSet<String>,
    /// Draft generations consumed in trial mode.
    #[serde(default)]
    pub trial_generations_used: u32,
}

impl ClientSession {
    /// Mark a tour as seen.
    pub fn mark_tour_seen(&mut self, tour: impl Into<String>) {
        self.tours_seen.insert(tour.into());
    }

    /// Whether a tour has been completed.
    pub fn has_seen_tour(&self, tour: &str) -> bool {
        self.tours_seen.contains(tour)
    }

    /// Record one trial generation.
    pub fn record_trial_generation(&mut self) {
        self.trial_generations_used += 1;
    }

    /// Reset all persisted state to its initial values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Persistence for [`ClientSession`], keyed by a client identifier.
pub trait SessionStore: Send + Sync {
    /// Load a session, if one was ever saved.
    fn load(&self, key: &str) -> AppResult<Option<ClientSession>>;

    /// Save a session.
    fn save(&self, key: &str, session: &ClientSession) -> AppResult<()>;

    /// Remove a stored session.
    fn clear(&self, key: &str) -> AppResult<()>;
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, ClientSession>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> AppResult<Option<ClientSession>> {
        Ok(self.sessions.get(key).map(|entry| entry.clone()))
    }

    fn save(&self, key: &str, session: &ClientSession) -> AppResult<()> {
        self.sessions.insert(key.to_string(), session.clone());
        Ok(())
    }

    fn clear(&self, key: &str) -> AppResult<()> {
        self.sessions.remove(key);
        Ok(())
    }
}
