//! # adforge-entity
//!
//! Domain entity models for AdForge: assets with their embedded version
//! history, campaigns, and comments.

pub mod asset;
pub mod campaign;
pub mod comment;
