use crate::lexicon::{EMOTIONAL_WORDS, PERSONAL_PRONOUNS, SOFT_CALLS_TO_ACTION};
use crate::scoring::clamp01;
use crate::text::{contains_any, count_present, TextFeatures};

const BASE: f64 = 0.5;
pub const QUESTION_BONUS: f64 = 0.2;

pub fn engagement(features: &TextFeatures) -> f64 {
    if features.is_blank() {
        return 0.0;
    }

    let lower = features.lower.as_str();
    let mut score = BASE;

    if features.questions > 0 {
        score += QUESTION_BONUS;
    }

    score += match count_present(lower, PERSONAL_PRONOUNS) {
        0 => 0.0,
        1..=2 => 0.1,
        _ => 0.2,
    };

    if count_present(lower, EMOTIONAL_WORDS) >= 2 {
        score += 0.1;
    }

    if contains_any(lower, SOFT_CALLS_TO_ACTION) {
        score += 0.1;
    }

    clamp01(score)
}
