//! Heuristic in-process analyzer.
//!
//! Scores copy with cheap lexical heuristics and drafts content from
//! templates. Deterministic for a given input, apart from the optional
//! simulated latency, so tests can assert on its output.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use adforge_core::config::analyzer::AnalyzerConfig;
use adforge_core::result::AppResult;
use adforge_core::traits::analyzer::ContentAnalyzer;
use adforge_core::types::analysis::{AnalysisReport, DraftBrief};

/// Tone labels the stub distributes percentages over.
const TONE_LABELS: [(&str, &[&str]); 4] = [
    (
        "professional",
        &["solution", "service", "quality", "deliver", "expertise"],
    ),
    (
        "friendly",
        &["you", "your", "welcome", "thanks", "love", "enjoy"],
    ),
    (
        "urgent",
        &["now", "today", "limited", "hurry", "last", "don't miss"],
    ),
    (
        "informative",
        &["learn", "discover", "how", "guide", "features", "details"],
    ),
];

/// Verbs that count as a call to action.
const CTA_VERBS: [&str; 6] = ["buy", "subscribe", "sign up", "register", "shop", "get started"];

/// Local heuristic analyzer with simulated latency.
#[derive(Debug, Clone)]
pub struct StubAnalyzer {
    simulated_latency_ms: u64,
}

impl StubAnalyzer {
    /// Create a stub analyzer from configuration.
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            simulated_latency_ms: config.simulated_latency_ms,
        }
    }

    /// Sleep for the configured latency plus a little jitter.
    async fn simulate_latency(&self) {
        if self.simulated_latency_ms == 0 {
            return;
        }
        let jitter = rand::thread_rng().gen_range(0..=self.simulated_latency_ms / 4);
        tokio::time::sleep(Duration::from_millis(self.simulated_latency_ms + jitter)).await;
    }

    fn readability(content: &str) -> u8 {
        let words: Vec<&str> = content.split_whitespace().collect();
        if words.is_empty() {
            return 0;
        }
        let sentences = content
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count()
            .max(1);

        let avg_sentence_len = words.len() as f64 / sentences as f64;
        let avg_word_len =
            words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64;

        // Long sentences and long words both cost points.
        let score = 100.0 - (avg_sentence_len - 12.0).max(0.0) * 2.5 - (avg_word_len - 4.5).max(0.0) * 10.0;
        score.clamp(0.0, 100.0).round() as u8
    }

    fn tone_distribution(content: &str) -> BTreeMap<String, u8> {
        let lower = content.to_lowercase();
        let hits: Vec<(&str, usize)> = TONE_LABELS
            .iter()
            .map(|(label, keywords)| {
                let count = keywords.iter().map(|k| lower.matches(k).count()).sum();
                (*label, count)
            })
            .collect();

        let total: usize = hits.iter().map(|(_, c)| c).sum();
        let mut tone = BTreeMap::new();
        if total == 0 {
            // No signal at all reads as neutral/informative.
            tone.insert("informative".to_string(), 100);
            return tone;
        }

        let mut assigned = 0u8;
        for (label, count) in &hits {
            if *count == 0 {
                continue;
            }
            let pct = ((count * 100) / total) as u8;
            tone.insert((*label).to_string(), pct);
            assigned = assigned.saturating_add(pct);
        }
        // Rounding remainder goes to the dominant label.
        if assigned < 100 {
            if let Some((label, _)) = hits.iter().max_by_key(|(_, c)| *c) {
                if let Some(pct) = tone.get_mut(*label) {
                    *pct += 100 - assigned;
                }
            }
        }
        tone
    }

    fn strengths_and_suggestions(content: &str) -> (Vec<String>, Vec<String>) {
        let mut strengths = Vec::new();
        let mut suggestions = Vec::new();

        let lower = content.to_lowercase();
        let word_count = content.split_whitespace().count();
        let has_cta = CTA_VERBS.iter().any(|v| lower.contains(v));

        if word_count > 0 && word_count <= 150 {
            strengths.push("Concise copy that respects the reader's time".to_string());
        } else if word_count > 300 {
            suggestions.push("Tighten the copy; aim for under 300 words".to_string());
        }

        if has_cta {
            strengths.push("Contains a clear call to action".to_string());
        } else {
            suggestions.push("Add a call to action so readers know the next step".to_string());
        }

        if lower.contains("you") || lower.contains("your") {
            strengths.push("Speaks directly to the reader".to_string());
        } else if word_count > 0 {
            suggestions.push("Address the reader directly with \"you\" language".to_string());
        }

        let exclamations = content.matches('!').count();
        if exclamations > 3 {
            suggestions.push("Reduce exclamation marks; one is usually enough".to_string());
        }

        if word_count == 0 {
            suggestions.push("Write some content before analyzing".to_string());
        }

        (strengths, suggestions)
    }
}

#[async_trait]
impl ContentAnalyzer for StubAnalyzer {
    async fn analyze(&self, content: &str) -> AppResult<AnalysisReport> {
        self.simulate_latency().await;

        let (strengths, suggestions) = Self::strengths_and_suggestions(content);
        Ok(AnalysisReport {
            readability_score: Self::readability(content),
            tone: Self::tone_distribution(content),
            strengths,
            suggestions,
        }
        .clamped())
    }

    async fn generate_draft(&self, brief: &DraftBrief) -> AppResult<String> {
        self.simulate_latency().await;

        let audience = brief.target_audience.as_deref().unwrap_or("your audience");
        let tone = brief.tone.as_deref().unwrap_or("friendly");
        let mut draft = match brief.kind.as_str() {
            "email" => format!(
                "Subject: {topic}\n\nHi there,\n\nWe wanted to share something about {topic} \
                 with {audience}. Written in a {tone} voice, this is your starting point — \
                 make it yours.\n\nGet started today.",
                topic = brief.topic,
                audience = audience,
                tone = tone,
            ),
            "landing-page" => format!(
                "# {topic}\n\nBuilt for {audience}.\n\nDiscover how {topic} can work for you. \
                 Sign up to learn more.",
                topic = brief.topic,
                audience = audience,
            ),
            "ad-copy" => format!(
                "{topic} — made for {audience}. Get started now.",
                topic = brief.topic,
                audience = audience,
            ),
            _ => format!(
                "{topic}\n\nAn overview for {audience}, in a {tone} tone. \
                 Learn more about what we offer and why it matters.",
                topic = brief.topic,
                audience = audience,
                tone = tone,
            ),
        };

        if let Some(style) = &brief.brand_style {
            draft.push_str(&format!("\n\n(Style notes: {style})"));
        }

        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> StubAnalyzer {
        StubAnalyzer::new(&AnalyzerConfig {
            simulated_latency_ms: 0,
            ..AnalyzerConfig::default()
        })
    }

    #[tokio::test]
    async fn test_report_shape_is_honored() {
        let report = analyzer()
            .analyze("Sign up today and enjoy our service. You will love it.")
            .await
            .unwrap();

        assert!(report.readability_score <= 100);
        assert_eq!(report.tone.values().map(|v| *v as u32).sum::<u32>(), 100);
        assert!(!report.strengths.is_empty());
    }

    #[tokio::test]
    async fn test_empty_content_scores_zero() {
        let report = analyzer().analyze("").await.unwrap();
        assert_eq!(report.readability_score, 0);
        assert!(!report.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_missing_cta_is_suggested() {
        let report = analyzer()
            .analyze("Our product has many features and details.")
            .await
            .unwrap();
        assert!(
            report
                .suggestions
                .iter()
                .any(|s| s.contains("call to action"))
        );
    }

    #[tokio::test]
    async fn test_draft_mentions_topic() {
        let brief = DraftBrief {
            kind: "email".to_string(),
            topic: "Spring sale".to_string(),
            target_audience: Some("returning customers".to_string()),
            tone: None,
            brand_style: None,
        };
        let draft = analyzer().generate_draft(&brief).await.unwrap();
        assert!(draft.contains("Spring sale"));
        assert!(draft.contains("returning customers"));
    }
}
