//! Content analysis service.

mod service;

pub use service::AnalysisService;
