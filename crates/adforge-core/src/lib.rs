//! # adforge-core
//!
//! Core crate for AdForge. Contains configuration schemas, the unified
//! error system, pagination types, and the analyzer capability trait.
//!
//! This crate has **no** internal dependencies on other AdForge crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
