//! # adforge-service
//!
//! Business logic for AdForge. Services sit between the HTTP layer and the
//! stores: they validate input, enforce the version-token rules on the save
//! path, and log state transitions. Each service depends on store traits,
//! never on a concrete backend.

pub mod analysis;
pub mod asset;
pub mod campaign;
pub mod comment;

pub use analysis::AnalysisService;
pub use asset::AssetService;
pub use campaign::CampaignService;
pub use comment::CommentService;
