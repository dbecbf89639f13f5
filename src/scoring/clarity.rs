use crate::lexicon::{COMPLEX_WORDS, PASSIVE_MARKERS};
use crate::scoring::clamp01;
use crate::text::{count_present, TextFeatures};

const BASE: f64 = 0.5;

pub fn clarity(features: &TextFeatures) -> f64 {
    if features.is_blank() {
        return 0.0;
    }

    let mut score = BASE;

    let avg_words = features.avg_sentence_words();
    score += if avg_words <= 15.0 {
        0.2
    } else if avg_words <= 25.0 {
        0.1
    } else {
        -0.1
    };

    score += match count_present(&features.lower, COMPLEX_WORDS) {
        0 => 0.2,
        1..=2 => 0.1,
        _ => -0.1,
    };

    score += if count_present(&features.lower, PASSIVE_MARKERS) == 0 {
        0.1
    } else {
        -0.1
    };

    clamp01(score)
}
