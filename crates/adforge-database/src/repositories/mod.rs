//! PostgreSQL repository implementations of the store traits.

pub mod asset;
pub mod campaign;
pub mod comment;

pub use asset::AssetRepository;
pub use campaign::CampaignRepository;
pub use comment::CommentRepository;
