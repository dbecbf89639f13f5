use std::collections::HashSet;

use crate::config::FeedbackConfig;
use crate::{Metric, QualityMetrics};

const COHERENCE_TIPS: [&str; 5] = [
    "Improve logical flow by adding transition words like 'however', 'therefore', 'furthermore'",
    "Ensure each sentence builds naturally on the previous one",
    "Create a clear beginning, middle, and end structure",
    "Use paragraph breaks to separate different ideas or topics",
    "Check that your main message is consistently reinforced throughout",
];

const RELEVANCE_TIPS: [&str; 5] = [
    "Make content more relevant to your target audience by using their language and examples",
    "Include specific details that matter to your audience",
    "Add platform-specific elements (hashtags for Instagram, professional tone for LinkedIn)",
    "Ensure your call-to-action aligns with your audience's interests",
    "Use examples and references that your audience can relate to",
];

const CLARITY_TIPS: [&str; 5] = [
    "Use shorter, simpler sentences for better readability",
    "Avoid jargon and complex vocabulary",
    "Make your main message crystal clear from the start",
    "Break up long paragraphs into smaller, digestible chunks",
    "Use bullet points or numbered lists for better organization",
];

const ENGAGEMENT_TIPS: [&str; 5] = [
    "Start with a compelling hook that grabs attention immediately",
    "Include a clear call-to-action that encourages interaction",
    "Ask questions to encourage comments and engagement",
    "Use emotional language that resonates with your audience",
    "Add relevant hashtags to increase discoverability",
];

const GENERAL_TIPS: [&str; 5] = [
    "Read your content aloud to check for natural flow and rhythm",
    "Have someone from your target audience review the content",
    "Test different versions to see which performs better",
    "Focus on one main message rather than trying to cover multiple topics",
    "Use storytelling techniques to make your content more engaging",
];

/// Metric-specific tiers in priority order.
const SUGGESTION_TIERS: [(Metric, &[&str; 5]); 4] = [
    (Metric::Coherence, &COHERENCE_TIPS),
    (Metric::Relevance, &RELEVANCE_TIPS),
    (Metric::Clarity, &CLARITY_TIPS),
    (Metric::Engagement, &ENGAGEMENT_TIPS),
];

pub fn strength_text(metric: Metric) -> &'static str {
    match metric {
        Metric::Coherence => "Excellent logical flow and coherence",
        Metric::Relevance => "Highly relevant to the context",
        Metric::Completeness => "Comprehensive and complete response",
        Metric::Clarity => "Clear and easy to understand",
        Metric::Engagement => "Engaging and interactive",
        Metric::Structure => "Well-structured and organized",
        Metric::Tone => "Appropriate tone for the context",
        Metric::Length => "Optimal length for the content type",
    }
}

pub fn weakness_text(metric: Metric) -> &'static str {
    match metric {
        Metric::Coherence => "Poor logical flow and coherence",
        Metric::Relevance => "Low relevance to the context",
        Metric::Completeness => "Incomplete response",
        Metric::Clarity => "Unclear or confusing",
        Metric::Engagement => "Not engaging enough",
        Metric::Structure => "Poor structure and organization",
        Metric::Tone => "Inappropriate tone",
        Metric::Length => "Length not appropriate for content type",
    }
}

pub fn strengths(metrics: &QualityMetrics, config: &FeedbackConfig) -> Vec<String> {
    metrics
        .iter()
        .filter(|(_, value)| *value >= config.strength_threshold)
        .map(|(metric, _)| strength_text(metric).to_string())
        .collect()
}

pub fn weaknesses(metrics: &QualityMetrics, config: &FeedbackConfig) -> Vec<String> {
    metrics
        .iter()
        .filter(|(_, value)| *value < config.weakness_threshold)
        .map(|(metric, _)| weakness_text(metric).to_string())
        .collect()
}

pub fn suggestions(
    metrics: &QualityMetrics,
    overall_score: u8,
    config: &FeedbackConfig,
) -> Vec<String> {
    let mut tips: Vec<&str> = Vec::new();
    for (metric, tier) in SUGGESTION_TIERS {
        if metrics.get(metric) < config.suggestion_threshold {
            tips.extend(tier.iter());
        }
    }
    if overall_score < config.fallback_score {
        tips.extend(GENERAL_TIPS.iter());
    }

    let mut suggestions = Vec::new();
    merge_suggestions(&mut suggestions, &tips, config.max_suggestions);
    suggestions
}

/// Appends `extras` skipping duplicates (case and spacing insensitive), keeping first-seen order.
pub fn merge_suggestions<S: AsRef<str>>(base: &mut Vec<String>, extras: &[S], limit: usize) {
    let mut seen: HashSet<String> = base.iter().map(|s| normalize_text(s)).collect();
    for suggestion in extras {
        let suggestion = suggestion.as_ref();
        let normalized = normalize_text(suggestion);
        if normalized.is_empty() || seen.contains(&normalized) {
            continue;
        }
        base.push(suggestion.to_string());
        seen.insert(normalized);
    }
    base.truncate(limit);
}

fn normalize_text(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: f64) -> QualityMetrics {
        QualityMetrics {
            coherence: value,
            relevance: value,
            completeness: value,
            clarity: value,
            engagement: value,
            structure: value,
            tone: value,
            length: value,
        }
    }

    #[test]
    fn thresholds_split_strengths_and_weaknesses() {
        let config = FeedbackConfig::default();
        let mut metrics = uniform(0.6);
        metrics.coherence = 0.8;
        metrics.length = 0.3;

        assert_eq!(
            strengths(&metrics, &config),
            vec!["Excellent logical flow and coherence"]
        );
        assert_eq!(
            weaknesses(&metrics, &config),
            vec!["Length not appropriate for content type"]
        );
    }

    #[test]
    fn low_scores_fill_the_cap_in_tier_order() {
        let suggestions = suggestions(&uniform(0.0), 0, &FeedbackConfig::default());
        assert_eq!(suggestions.len(), 8);
        assert_eq!(suggestions[0], COHERENCE_TIPS[0]);
        assert_eq!(suggestions[5], RELEVANCE_TIPS[0]);
    }

    #[test]
    fn strong_response_gets_no_suggestions() {
        assert!(suggestions(&uniform(0.9), 90, &FeedbackConfig::default()).is_empty());
    }

    #[test]
    fn only_general_tips_below_fallback_score() {
        let suggestions = suggestions(&uniform(0.75), 65, &FeedbackConfig::default());
        assert_eq!(suggestions, GENERAL_TIPS.to_vec());
    }

    #[test]
    fn merge_skips_duplicates() {
        let mut base = vec!["Ask a question".to_string()];
        merge_suggestions(&mut base, &["ask  a QUESTION", "Add a link", "Add a link"], 10);
        assert_eq!(base, vec!["Ask a question", "Add a link"]);
    }
}
