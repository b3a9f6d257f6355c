//! Content analysis and draft generation data shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The result of analyzing a piece of marketing copy.
///
/// This is the wire shape every [`crate::traits::analyzer::ContentAnalyzer`]
/// implementation must honor, whether it calls a remote NLP service or
/// computes heuristics locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Readability score in the range 0–100 (higher reads easier).
    pub readability_score: u8,
    /// Tone distribution: label → percentage. Percentages sum to 100.
    pub tone: BTreeMap<String, u8>,
    /// What the copy already does well.
    pub strengths: Vec<String>,
    /// Concrete improvement suggestions.
    pub suggestions: Vec<String>,
}

impl AnalysisReport {
    /// Clamp the readability score into the valid range.
    pub fn clamped(mut self) -> Self {
        self.readability_score = self.readability_score.min(100);
        self
    }
}

/// Parameters for AI-assisted draft generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftBrief {
    /// Kind of asset to draft, as its wire name (e.g. `"email"`).
    pub kind: String,
    /// What the copy should be about.
    pub topic: String,
    /// Intended audience, if known.
    pub target_audience: Option<String>,
    /// Requested tone of voice.
    pub tone: Option<String>,
    /// Brand style guidelines to respect.
    pub brand_style: Option<String>,
}
