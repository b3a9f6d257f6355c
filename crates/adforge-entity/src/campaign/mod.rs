//! Campaign entity.

pub mod model;

pub use model::{Campaign, CreateCampaign};
