//! Metrics that measure a response against its content profile rather than in isolation.

use crate::lexicon::STRUCTURAL_INDICATORS;
use crate::profiles::ContentProfile;
use crate::scoring::clamp01;
use crate::text::{count_present, TextFeatures};

const TONE_STEP: f64 = 0.2;

/// Fraction of the profile's required elements that show up in the text.
pub fn completeness(features: &TextFeatures, profile: &ContentProfile) -> f64 {
    if features.is_blank() || profile.required_elements.is_empty() {
        return 0.0;
    }
    let present = profile
        .required_elements
        .iter()
        .filter(|element| element.is_present(&features.lower))
        .count();
    present as f64 / profile.required_elements.len() as f64
}

pub fn structure(features: &TextFeatures) -> f64 {
    if features.is_blank() {
        return 0.0;
    }

    let mut score = 0.5;
    if features.paragraphs >= 2 {
        score += 0.2;
    }
    score += match count_present(&features.lower, STRUCTURAL_INDICATORS) {
        0 => 0.0,
        1 => 0.1,
        _ => 0.2,
    };
    if features.has_bullet_points || features.has_numbered_list {
        score += 0.1;
    }
    clamp01(score)
}

/// Each expected tone with at least one indicator present adds a step; clipped once at the end.
pub fn tone(features: &TextFeatures, profile: &ContentProfile) -> f64 {
    if features.is_blank() {
        return 0.0;
    }
    let matched = profile
        .expected_tones
        .iter()
        .filter(|tone| {
            tone.indicators()
                .iter()
                .any(|indicator| features.lower.contains(indicator))
        })
        .count();
    clamp01(0.5 + matched as f64 * TONE_STEP)
}

pub fn length(features: &TextFeatures, profile: &ContentProfile) -> f64 {
    if features.is_blank() {
        return 0.0;
    }
    profile.optimal_length.fit_score(features.words)
}
