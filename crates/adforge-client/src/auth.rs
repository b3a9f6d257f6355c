//! Client auth state.
//!
//! Resolved once at session start from whatever credentials are stored,
//! then injected into the components that need it. Nothing re-derives
//! auth state ad hoc afterwards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored profile of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Option<String>,
}

/// The client's authentication state for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// A token exists but no usable profile; the user must sign in again.
    Unauthenticated,
    /// Signed in with a stored profile.
    Authenticated(UserProfile),
    /// No credentials at all; limited trial usage.
    TrialMode,
}

impl AuthState {
    /// Resolve the session's auth state from stored credentials.
    ///
    /// A token is only trusted together with a stored profile; a token
    /// without one is treated as signed out rather than guessing an
    /// identity. No credentials at all means trial mode.
    pub fn resolve(token: Option<&str>, profile: Option<UserProfile>) -> Self {
        match (token, profile) {
            (Some(token), Some(profile)) if !token.is_empty() => Self::Authenticated(profile),
            (Some(_), _) => Self::Unauthenticated,
            (None, _) => Self::TrialMode,
        }
    }

    /// Whether the user is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
