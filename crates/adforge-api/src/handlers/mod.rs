//! HTTP handlers, organized by domain.

pub mod analysis;
pub mod asset;
pub mod campaign;
pub mod health;
