//! Integration tests driving the real router over in-memory stores.

mod helpers;

mod analysis_test;
mod asset_test;
mod campaign_test;
mod comment_test;
mod version_test;
