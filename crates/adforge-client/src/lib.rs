//! # adforge-client
//!
//! Typed client core for AdForge. Holds the editor state machine, the
//! version-history display projection, auth state resolution, and the
//! persisted client session schema. All server interaction goes through
//! the [`backend::AssetBackend`] trait, so the editor is testable without
//! a running server.

pub mod auth;
pub mod backend;
pub mod editor;
pub mod history;
pub mod session;

pub use auth::{AuthState, UserProfile};
pub use backend::{AssetBackend, HttpBackend};
pub use editor::{EditorPhase, EditorSession};
pub use history::HistoryProjection;
pub use session::{ClientSession, MemorySessionStore, SessionStore};
