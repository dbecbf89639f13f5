use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::platform::profiles::{tone_indicators, EmojiUsage, PlatformProfile, Signal};
use crate::profiles::LengthBand;
use crate::scoring::clamp01;
use crate::text::{count_matches, count_present, hashtags, TextFeatures};

static PRONOUN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(you|your|we|our|us)\b").ok());
static MENTION: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"@\w+").ok());
static TIMESTAMP: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}:\d{2}\b").ok());
static FIRST_PERSON: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(i|me|my|mine|myself)\b").ok());

const LINK_MARKERS: [&str; 3] = ["http://", "https://", "www."];
const SUGGESTION_LIMIT: usize = 5;

/// Raw counts the platform metrics are computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformSignals<'a> {
    pub hashtags: Vec<&'a str>,
    pub emojis: usize,
    pub mentions: usize,
    pub links: usize,
    pub timestamps: usize,
    pub first_person: usize,
    pub pronouns: usize,
    pub chars: usize,
    pub words: usize,
    pub questions: usize,
}

impl<'a> PlatformSignals<'a> {
    pub fn extract(features: &TextFeatures<'a>) -> Self {
        let text = features.raw;
        let mut emojis = 0usize;
        let mut chars = 0usize;
        for ch in text.chars() {
            chars += 1;
            if is_emoji(ch) {
                emojis += 1;
            }
        }

        Self {
            hashtags: hashtags(text),
            emojis,
            mentions: count_matches(&MENTION, text),
            links: LINK_MARKERS
                .iter()
                .map(|marker| features.lower.matches(marker).count())
                .sum(),
            timestamps: count_matches(&TIMESTAMP, text),
            first_person: count_matches(&FIRST_PERSON, text),
            pronouns: count_matches(&PRONOUN, text),
            chars,
            words: features.words,
            questions: features.questions,
        }
    }
}

fn is_emoji(ch: char) -> bool {
    matches!(
        ch as u32,
        0x1F600..=0x1F64F
            | 0x1F300..=0x1F5FF
            | 0x1F680..=0x1F6FF
            | 0x1F1E0..=0x1F1FF
            | 0x2600..=0x26FF
            | 0x2700..=0x27BF
    )
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMetrics {
    pub hashtag_count: usize,
    pub hashtag_score: f64,
    pub hashtag_relevance: f64,
    pub emoji_count: usize,
    pub emoji_score: f64,
    pub length_score: f64,
    pub character_efficiency: f64,
    pub engagement_score: f64,
    pub call_to_action_score: f64,
    pub question_score: f64,
    pub tone_score: f64,
    pub keyword_score: f64,
    /// Present only for visual-first platforms that define a visual vocabulary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_keywords_score: Option<f64>,
    pub mention_score: f64,
    pub link_score: f64,
    pub timestamp_score: f64,
    pub personal_story_score: f64,
}

impl PlatformMetrics {
    pub fn compute(
        features: &TextFeatures,
        signals: &PlatformSignals,
        profile: &PlatformProfile,
    ) -> Self {
        let lower = features.lower.as_str();
        let hashtag_count = signals.hashtags.len();

        Self {
            hashtag_count,
            hashtag_score: profile.hashtag_limit.fit_score(hashtag_count),
            hashtag_relevance: hashtag_relevance(&signals.hashtags, profile.hashtag_categories),
            emoji_count: signals.emojis,
            emoji_score: emoji_score(signals.emojis, signals.words, profile.emoji_usage),
            length_score: length_score(signals, profile),
            character_efficiency: character_efficiency(signals, profile.optimal_word_length),
            engagement_score: engagement_score(lower, signals, profile),
            call_to_action_score: if count_present(lower, profile.engagement_phrases) > 0 {
                1.0
            } else {
                0.0
            },
            question_score: (signals.questions as f64 * 0.3).min(1.0),
            tone_score: tone_score(lower, profile.tone_preferences),
            keyword_score: keyword_score(lower, profile),
            visual_keywords_score: visual_keywords_score(lower, profile),
            mention_score: (signals.mentions as f64 * 0.5).min(1.0),
            link_score: if signals.links > 0 { 1.0 } else { 0.0 },
            timestamp_score: (signals.timestamps as f64 * 0.25).min(1.0),
            personal_story_score: (signals.first_person as f64 * 0.2).min(1.0),
        }
    }

    /// The metric a platform's weighted signal reads from.
    pub fn signal_score(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Hashtags => self.hashtag_score,
            Signal::Emojis => self.emoji_score,
            Signal::Questions => self.question_score,
            Signal::CallToAction => self.call_to_action_score,
            Signal::PersonalStory => self.personal_story_score,
            Signal::Community | Signal::Trending | Signal::ProfessionalInsight => {
                self.keyword_score
            }
            Signal::Mentions => self.mention_score,
            Signal::Brevity => self.length_score,
            Signal::IndustryRelevance => self.hashtag_relevance,
            Signal::ThoughtLeadership => self.tone_score,
            Signal::Networking => self.engagement_score,
            Signal::VideoDescription => self.visual_keywords_score.unwrap_or(0.0),
            Signal::Timestamps => self.timestamp_score,
            Signal::Links => self.link_score,
        }
    }
}

/// Weighted mean of the platform's signals on a 0-100 scale.
pub fn platform_score(metrics: &PlatformMetrics, profile: &PlatformProfile) -> u8 {
    let mut total = 0.0;
    let mut total_weight = 0.0;
    for entry in profile.signal_weights {
        total += clamp01(metrics.signal_score(entry.signal)) * entry.weight;
        total_weight += entry.weight;
    }
    if total_weight <= 0.0 {
        return 0;
    }
    (total / total_weight * 100.0).round().clamp(0.0, 100.0) as u8
}

fn hashtag_relevance(tags: &[&str], categories: &[&str]) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }
    let relevant = tags
        .iter()
        .filter(|tag| {
            let tag = tag.trim_start_matches('#').to_lowercase();
            categories.iter().any(|category| tag.contains(category))
        })
        .count();
    relevant as f64 / tags.len() as f64
}

fn emoji_score(emojis: usize, words: usize, usage: EmojiUsage) -> f64 {
    let ratio = if words == 0 {
        0.0
    } else {
        emojis as f64 / words as f64
    };
    match usage {
        EmojiUsage::High => {
            if (0.1..=0.3).contains(&ratio) {
                1.0
            } else if (0.05..=0.4).contains(&ratio) {
                0.7
            } else {
                0.4
            }
        }
        EmojiUsage::Moderate => {
            if (0.05..=0.15).contains(&ratio) {
                1.0
            } else if (0.02..=0.25).contains(&ratio) {
                0.7
            } else {
                0.4
            }
        }
        EmojiUsage::Low => {
            if ratio <= 0.05 {
                1.0
            } else if ratio <= 0.1 {
                0.7
            } else {
                0.3
            }
        }
    }
}

fn length_score(signals: &PlatformSignals, profile: &PlatformProfile) -> f64 {
    if signals.chars > profile.character_limit {
        return 0.1;
    }
    profile.optimal_length.fit_score(signals.words)
}

fn character_efficiency(signals: &PlatformSignals, optimal_word_length: f64) -> f64 {
    if signals.words == 0 || optimal_word_length <= 0.0 {
        return 0.0;
    }
    let avg_word_length = signals.chars as f64 / signals.words as f64;
    let deviation = (avg_word_length - optimal_word_length).abs();
    (1.0 - deviation / optimal_word_length).max(0.0)
}

fn engagement_score(lower: &str, signals: &PlatformSignals, profile: &PlatformProfile) -> f64 {
    let phrases = count_present(lower, profile.engagement_phrases) as f64 * 0.2;
    let questions = (signals.questions as f64 * 0.15).min(0.3);
    let pronouns = (signals.pronouns as f64 * 0.1).min(0.2);
    (phrases + questions + pronouns).min(1.0)
}

fn tone_score(lower: &str, preferred: &[&str]) -> f64 {
    let score: f64 = preferred
        .iter()
        .map(|tone| tone_indicators(tone))
        .filter(|indicators| !indicators.is_empty())
        .map(|indicators| count_present(lower, indicators) as f64 / indicators.len() as f64 * 0.25)
        .sum();
    score.min(1.0)
}

fn keyword_score(lower: &str, profile: &PlatformProfile) -> f64 {
    let score: f64 = [
        profile.professional_keywords,
        profile.community_keywords,
        profile.trending_keywords,
    ]
    .iter()
    .filter(|set| !set.is_empty())
    .map(|set| count_present(lower, set) as f64 / set.len() as f64 * 0.5)
    .sum();
    score.min(1.0)
}

fn visual_keywords_score(lower: &str, profile: &PlatformProfile) -> Option<f64> {
    if !profile.visual_focus || profile.visual_keywords.is_empty() {
        return None;
    }
    let matches = count_present(lower, profile.visual_keywords);
    Some((matches as f64 * 0.2).min(1.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OptimizationStatus {
    #[serde(rename = "optimal")]
    Optimal,
    #[serde(rename = "needs-improvement")]
    NeedsImprovement,
}

impl OptimizationStatus {
    fn from_optimal(optimal: bool) -> Self {
        if optimal {
            OptimizationStatus::Optimal
        } else {
            OptimizationStatus::NeedsImprovement
        }
    }

    pub fn needs_improvement(self) -> bool {
        self == OptimizationStatus::NeedsImprovement
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Optimization<R> {
    pub current: usize,
    pub recommended: R,
    pub status: OptimizationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformOptimization {
    pub hashtag_optimization: Optimization<LengthBand>,
    pub emoji_optimization: Optimization<EmojiUsage>,
    pub length_optimization: Optimization<LengthBand>,
}

impl PlatformOptimization {
    pub fn assess(signals: &PlatformSignals, profile: &PlatformProfile) -> Self {
        let hashtags = signals.hashtags.len();
        Self {
            hashtag_optimization: Optimization {
                current: hashtags,
                recommended: profile.hashtag_limit,
                status: OptimizationStatus::from_optimal(profile.hashtag_limit.contains(hashtags)),
            },
            emoji_optimization: Optimization {
                current: signals.emojis,
                recommended: profile.emoji_usage,
                status: OptimizationStatus::from_optimal(emoji_count_fits(
                    signals.emojis,
                    profile.emoji_usage,
                )),
            },
            length_optimization: Optimization {
                current: signals.words,
                recommended: profile.optimal_length,
                status: OptimizationStatus::from_optimal(
                    profile.optimal_length.contains(signals.words),
                ),
            },
        }
    }
}

fn emoji_count_fits(count: usize, usage: EmojiUsage) -> bool {
    match usage {
        EmojiUsage::High => count >= 3,
        EmojiUsage::Moderate => (1..=5).contains(&count),
        EmojiUsage::Low => count <= 2,
    }
}

/// Concrete fixes for whatever is off-target, then the platform's standing tips.
pub fn platform_suggestions(
    optimization: &PlatformOptimization,
    profile: &PlatformProfile,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    let hashtags = &optimization.hashtag_optimization;
    if hashtags.status.needs_improvement() {
        if hashtags.current < hashtags.recommended.min {
            suggestions.push(format!(
                "Add {} more hashtags for better discoverability",
                hashtags.recommended.min - hashtags.current
            ));
        } else if hashtags.current > hashtags.recommended.max {
            suggestions.push(format!(
                "Reduce hashtags to {} for better readability",
                hashtags.recommended.max
            ));
        }
    }

    let emojis = &optimization.emoji_optimization;
    if emojis.status.needs_improvement() {
        match emojis.recommended {
            EmojiUsage::High => suggestions
                .push("Add more emojis to make your content more engaging and visual".to_string()),
            EmojiUsage::Low => {
                suggestions.push("Reduce emoji usage for a more professional tone".to_string())
            }
            EmojiUsage::Moderate => {}
        }
    }

    let length = &optimization.length_optimization;
    if length.status.needs_improvement() {
        if length.current < length.recommended.min {
            suggestions.push(format!(
                "Expand your content to at least {} words for better engagement",
                length.recommended.min
            ));
        } else if length.current > length.recommended.max {
            suggestions.push(format!(
                "Keep your content under {} words for better readability",
                length.recommended.max
            ));
        }
    }

    suggestions.extend(profile.tips.iter().map(|tip| tip.to_string()));
    suggestions.truncate(SUGGESTION_LIMIT);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    fn analyze(text: &str, platform: Platform) -> (PlatformMetrics, PlatformOptimization) {
        let features = TextFeatures::extract(text);
        let signals = PlatformSignals::extract(&features);
        let profile = platform.profile();
        (
            PlatformMetrics::compute(&features, &signals, profile),
            PlatformOptimization::assess(&signals, profile),
        )
    }

    #[test]
    fn emoji_ranges_are_counted() {
        let features = TextFeatures::extract("Sunny \u{2600} day \u{1F600}\u{1F680} ok \u{1F44D}");
        let signals = PlatformSignals::extract(&features);
        // U+1F44D sits in the 1F300-1F5FF block
        assert_eq!(signals.emojis, 4);
        assert!(!is_emoji('a'));
        assert!(!is_emoji('\u{00E9}'));
    }

    #[test]
    fn twitter_over_the_character_limit_scores_low() {
        let text = vec!["word"; 60].join(" ");
        let (metrics, _) = analyze(&text, Platform::Twitter);
        assert_eq!(metrics.length_score, 0.1);
    }

    #[test]
    fn hashtag_relevance_matches_categories() {
        let (metrics, optimization) =
            analyze("Big news #TrendingNow #mybrand #random", Platform::Twitter);
        assert_eq!(metrics.hashtag_count, 3);
        assert!((metrics.hashtag_relevance - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            optimization.hashtag_optimization.status,
            OptimizationStatus::Optimal
        );
    }

    #[test]
    fn visual_keywords_only_for_visual_platforms() {
        let (instagram, _) = analyze("A stunning and beautiful view", Platform::Instagram);
        assert!((instagram.visual_keywords_score.unwrap_or_default() - 0.4).abs() < 1e-9);
        let (facebook, _) = analyze("A stunning and beautiful view", Platform::Facebook);
        assert_eq!(facebook.visual_keywords_score, None);
        let (tiktok, _) = analyze("A stunning and beautiful view", Platform::Tiktok);
        assert_eq!(tiktok.visual_keywords_score, None);
    }

    #[test]
    fn engagement_phrases_drive_call_to_action() {
        let (metrics, _) = analyze("What do you think? Share your thoughts", Platform::Facebook);
        assert_eq!(metrics.call_to_action_score, 1.0);
        // two phrases, one question, "you" and "your"
        assert!((metrics.engagement_score - (0.4 + 0.15 + 0.2)).abs() < 1e-9);
        assert!((metrics.question_score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn suggestions_fix_gaps_before_tips_and_cap_at_five() {
        let (_, optimization) = analyze("Short caption", Platform::Instagram);
        let suggestions = platform_suggestions(&optimization, Platform::Instagram.profile());
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0], "Add 5 more hashtags for better discoverability");
        assert_eq!(
            suggestions[1],
            "Add more emojis to make your content more engaging and visual"
        );
        assert_eq!(
            suggestions[2],
            "Expand your content to at least 50 words for better engagement"
        );
    }

    #[test]
    fn platform_score_is_weighted_percentage() {
        let mut metrics = PlatformMetrics::default();
        metrics.hashtag_score = 1.0;
        metrics.mention_score = 1.0;
        // twitter: hashtags 0.30 + mentions 0.25
        assert_eq!(platform_score(&metrics, Platform::Twitter.profile()), 55);
    }
}
