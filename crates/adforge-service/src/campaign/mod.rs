//! Campaign service.

mod service;

pub use service::CampaignService;
