//! Descriptive facts about a response: patterns, layout, key points, sentiment and complexity.
//! None of these feed the scores.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::lexicon::{COMPLEXITY_WORDS, KEY_INDICATORS, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::text::{count_present, is_match, TextFeatures};

static PERSONAL_PRONOUN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(you|your|we|our|us)\b").ok());
static EMOTIONAL_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(amazing|fantastic|wonderful|excellent|great|love|enjoy|appreciate)\b").ok()
});
static CALL_TO_ACTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(try|consider|think about|imagine|suppose)\b").ok());
static TRANSITION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(however|therefore|furthermore|moreover|in addition|consequently|as a result|meanwhile|subsequently)\b",
    )
    .ok()
});
static PARAGRAPH_GAP: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\n\s*\n").ok());
static INTRODUCTION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(introduction|overview|summary|first|initially)\b").ok()
});
static CONCLUSION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(conclusion|finally|in summary|overall|therefore)\b").ok()
});

const KEY_POINT_MIN_CHARS: usize = 10;
const FALLBACK_KEY_POINTS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysis {
    pub has_questions: bool,
    pub has_personal_pronouns: bool,
    pub has_emotional_words: bool,
    pub has_call_to_action: bool,
    pub has_transitions: bool,
    pub has_bullet_points: bool,
    pub has_numbered_list: bool,
    pub has_paragraphs: bool,
}

impl PatternAnalysis {
    pub fn detect(features: &TextFeatures) -> Self {
        if features.is_blank() {
            return Self::default();
        }
        let text = features.raw;
        Self {
            has_questions: features.questions > 0,
            has_personal_pronouns: is_match(&PERSONAL_PRONOUN, text),
            has_emotional_words: is_match(&EMOTIONAL_WORD, text),
            has_call_to_action: is_match(&CALL_TO_ACTION, text),
            has_transitions: is_match(&TRANSITION, text),
            has_bullet_points: features.has_bullet_points,
            has_numbered_list: features.has_numbered_list,
            has_paragraphs: is_match(&PARAGRAPH_GAP, text),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureAnalysis {
    pub paragraphs: usize,
    pub sentences: usize,
    pub words: usize,
    /// Words per sentence.
    pub avg_sentence_length: f64,
    /// Sentences per paragraph.
    pub avg_paragraph_length: f64,
    pub has_introduction: bool,
    pub has_conclusion: bool,
    pub has_body: bool,
}

impl StructureAnalysis {
    pub fn measure(features: &TextFeatures) -> Self {
        if features.is_blank() {
            return Self::default();
        }
        let sentences = features.sentence_count();
        Self {
            paragraphs: features.paragraphs,
            sentences,
            words: features.words,
            avg_sentence_length: ratio(features.words, sentences),
            avg_paragraph_length: ratio(sentences, features.paragraphs),
            has_introduction: is_match(&INTRODUCTION, features.raw),
            has_conclusion: is_match(&CONCLUSION, features.raw),
            has_body: sentences > 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn classify(features: &TextFeatures) -> Self {
        let positive = count_present(&features.lower, POSITIVE_WORDS);
        let negative = count_present(&features.lower, NEGATIVE_WORDS);
        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Moderate,
    High,
}

impl Complexity {
    pub fn classify(features: &TextFeatures) -> Self {
        if features.is_blank() {
            return Complexity::Moderate;
        }
        let avg_words = features.avg_sentence_words();
        let complex_words = count_present(&features.lower, COMPLEXITY_WORDS);
        if avg_words > 20.0 || complex_words > 3 {
            Complexity::High
        } else if avg_words < 10.0 && complex_words == 0 {
            Complexity::Low
        } else {
            Complexity::Moderate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Moderate => "moderate",
            Complexity::High => "high",
        }
    }
}

/// Sentences flagged by a key-indicator word, or the opening sentences when none are.
pub fn key_points(features: &TextFeatures, limit: usize) -> Vec<String> {
    let flagged: Vec<String> = features
        .sentences
        .iter()
        .filter(|sentence| {
            let lower = sentence.text.to_lowercase();
            sentence.text.chars().count() > KEY_POINT_MIN_CHARS
                && KEY_INDICATORS.iter().any(|indicator| lower.contains(indicator))
        })
        .map(|sentence| sentence.text.to_string())
        .collect();

    let mut points = if flagged.is_empty() {
        features
            .sentences
            .iter()
            .take(FALLBACK_KEY_POINTS)
            .map(|sentence| sentence.text.to_string())
            .collect()
    } else {
        flagged
    };
    points.truncate(limit);
    points
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_regexes_respect_word_boundaries() {
        let features = TextFeatures::extract("Trying the youth menu in Houston");
        let patterns = PatternAnalysis::detect(&features);
        assert!(!patterns.has_personal_pronouns);
        assert!(!patterns.has_call_to_action);

        let features = TextFeatures::extract("Try it, you will love it.\n\nHowever, wait");
        let patterns = PatternAnalysis::detect(&features);
        assert!(patterns.has_personal_pronouns);
        assert!(patterns.has_call_to_action);
        assert!(patterns.has_emotional_words);
        assert!(patterns.has_transitions);
        assert!(patterns.has_paragraphs);
        assert!(!patterns.has_questions);
    }

    #[test]
    fn structure_counts_and_averages() {
        let features = TextFeatures::extract("First we plan. Then we build.\n\nFinally we ship.");
        let structure = StructureAnalysis::measure(&features);
        assert_eq!(structure.paragraphs, 2);
        assert_eq!(structure.sentences, 3);
        assert_eq!(structure.words, 9);
        assert!((structure.avg_sentence_length - 3.0).abs() < 1e-9);
        assert!((structure.avg_paragraph_length - 1.5).abs() < 1e-9);
        assert!(structure.has_introduction);
        assert!(structure.has_conclusion);
        assert!(structure.has_body);
    }

    #[test]
    fn key_points_prefer_flagged_sentences() {
        let features = TextFeatures::extract(
            "Hello there. The key result is growth. Weather was fine. Main risk: cost overruns.",
        );
        assert_eq!(
            key_points(&features, 5),
            vec!["The key result is growth", "Main risk: cost overruns"]
        );
    }

    #[test]
    fn key_points_fall_back_to_opening_sentences() {
        let features = TextFeatures::extract("One. Two. Three. Four.");
        assert_eq!(key_points(&features, 5), vec!["One", "Two", "Three"]);
        assert!(key_points(&TextFeatures::extract(""), 5).is_empty());
    }

    #[test]
    fn sentiment_and_complexity_labels() {
        assert_eq!(
            Sentiment::classify(&TextFeatures::extract("A great and happy day")),
            Sentiment::Positive
        );
        assert_eq!(
            Sentiment::classify(&TextFeatures::extract("Awful, I hate it")),
            Sentiment::Negative
        );
        assert_eq!(
            Complexity::classify(&TextFeatures::extract("Short words here.")),
            Complexity::Low
        );
        let long = vec!["word"; 25].join(" ");
        assert_eq!(Complexity::classify(&TextFeatures::extract(&long)), Complexity::High);
        assert_eq!(Complexity::classify(&TextFeatures::extract("")), Complexity::Moderate);
    }
}
