//! Asset lifecycle service.

mod service;

pub use service::AssetService;
