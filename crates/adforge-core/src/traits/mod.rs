//! Core traits defined in `adforge-core` and implemented by other crates.

pub mod analyzer;

pub use analyzer::ContentAnalyzer;
