//! # adforge-database
//!
//! Persistence layer for AdForge: the store traits that services depend on,
//! their PostgreSQL implementations, and in-memory implementations used by
//! tests and the stub deployment mode.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use store::{AssetStore, CampaignStore, CommentStore};
