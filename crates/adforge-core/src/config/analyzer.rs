//! Content analyzer configuration.

use serde::{Deserialize, Serialize};

/// Content analyzer / draft generator configuration.
///
/// The `provider` selects between the in-process heuristic stub and the
/// live HTTP service. The stub honors `simulated_latency_ms` so client
/// code exercises the same async path in both modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Analyzer provider: `"stub"` or `"http"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Base URL of the live analyzer service (http provider only).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (http provider only).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Artificial latency added by the stub provider, in milliseconds.
    #[serde(default = "default_latency")]
    pub simulated_latency_ms: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            simulated_latency_ms: default_latency(),
        }
    }
}

fn default_provider() -> String {
    "stub".to_string()
}

fn default_base_url() -> String {
    "http://localhost:9090".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_latency() -> u64 {
    0
}
