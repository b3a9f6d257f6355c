//! # adforge-api
//!
//! HTTP API layer for AdForge built on Axum.
//!
//! Provides the REST endpoints for assets, versions, comments, campaigns,
//! and content analysis, plus DTOs, extractors, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
