//! # adforge-analyzer
//!
//! Implementations of the [`adforge_core::traits::ContentAnalyzer`]
//! capability: a local heuristic stub with simulated latency, a live HTTP
//! adapter, and the configuration-driven dispatch between them.

pub mod engine;
pub mod http;
pub mod stub;

pub use engine::AnalyzerEngine;
pub use http::HttpAnalyzer;
pub use stub::StubAnalyzer;
