//! Core type definitions used across the AdForge workspace.

pub mod analysis;
pub mod pagination;

pub use analysis::{AnalysisReport, DraftBrief};
pub use pagination::{PageRequest, PageResponse};
