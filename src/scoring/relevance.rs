use crate::context::AnalysisContext;
use crate::lexicon::{
    BUSINESS_TERMS, ENGAGEMENT_ELEMENTS, FACEBOOK_TERMS, FAMILY_TERMS, FOOD_TERMS, INSTAGRAM_TERMS,
    LINKEDIN_TERMS,
};
use crate::scoring::clamp01;
use crate::text::{count_present, TextFeatures};

const BASE: f64 = 0.5;
const CONTEXT_OVERLAP_WEIGHT: f64 = 0.3;
const AUDIENCE_WEIGHT: f64 = 0.2;
const PLATFORM_WEIGHT: f64 = 0.15;
const ENGAGEMENT_WEIGHT: f64 = 0.1;
const HASHTAG_BONUS: f64 = 0.1;
const MAX_HASHTAGS: usize = 5;

/// Audience triggers and the vocabulary that audience responds to.
const AUDIENCES: &[(&[&str], &[&str])] = &[
    (&["business", "professional"], BUSINESS_TERMS),
    (&["family", "parent"], FAMILY_TERMS),
    (&["foodie", "food"], FOOD_TERMS),
];

const PLATFORMS: &[(&str, &[&str])] = &[
    ("facebook", FACEBOOK_TERMS),
    ("instagram", INSTAGRAM_TERMS),
    ("linkedin", LINKEDIN_TERMS),
];

pub fn relevance(features: &TextFeatures, context: &AnalysisContext) -> f64 {
    if features.is_blank() {
        return BASE;
    }

    let lower = features.lower.as_str();
    let mut score = BASE;

    if !context.is_empty() {
        score += context_overlap(features, context) * CONTEXT_OVERLAP_WEIGHT;
    }

    if let Some(audience) = context.target_audience() {
        let audience = audience.to_lowercase();
        for (triggers, terms) in AUDIENCES {
            if triggers.iter().any(|trigger| audience.contains(trigger)) {
                score += term_density(lower, terms) * AUDIENCE_WEIGHT;
            }
        }
    }

    if let Some(platform) = context.platform() {
        let platform = platform.to_lowercase();
        for (name, terms) in PLATFORMS {
            if platform.contains(name) {
                score += term_density(lower, terms) * PLATFORM_WEIGHT;
            }
        }
    }

    score += term_density(lower, ENGAGEMENT_ELEMENTS) * ENGAGEMENT_WEIGHT;

    if features.hashtags > 0 && features.hashtags <= MAX_HASHTAGS {
        score += HASHTAG_BONUS;
    }

    clamp01(score)
}

/// Share of response words (longer than three characters) that also appear in the context.
pub fn context_overlap(features: &TextFeatures, context: &AnalysisContext) -> f64 {
    let keywords = context.keywords();
    let words = features.lower_words();
    if words.is_empty() || keywords.is_empty() {
        return 0.0;
    }
    let common = words
        .iter()
        .filter(|word| word.chars().count() > 3 && keywords.iter().any(|k| k.as_str() == **word))
        .count();
    common as f64 / words.len() as f64
}

fn term_density(lower: &str, terms: &[&str]) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    count_present(lower, terms) as f64 / terms.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_keeps_base() {
        let features = TextFeatures::extract("  ");
        assert_eq!(relevance(&features, &AnalysisContext::new()), BASE);
    }

    #[test]
    fn context_overlap_counts_shared_long_words() {
        let features = TextFeatures::extract("garden tips for busy parents");
        let context = AnalysisContext::new().with("topic", "Garden ideas for parents");
        // "garden" and "parents" out of five words
        assert!((context_overlap(&features, &context) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn audience_terms_add_weighted_density() {
        let features = TextFeatures::extract("A safe home for kids");
        let baseline = relevance(&features, &AnalysisContext::new());
        let context = AnalysisContext::new().with_target_audience("parent");
        let scored = relevance(&features, &context);
        // safe, home, kids: 3 of 8 family terms; "parent" itself is not in the text
        let expected = baseline + (3.0 / 8.0) * AUDIENCE_WEIGHT;
        assert!((scored - expected).abs() < 1e-9);
    }

    #[test]
    fn too_many_hashtags_earn_nothing() {
        let few = TextFeatures::extract("Launch day #a #b");
        let many = TextFeatures::extract("Launch day #a #b #c #d #e #f");
        let context = AnalysisContext::new();
        assert!((relevance(&few, &context) - (BASE + HASHTAG_BONUS)).abs() < 1e-9);
        assert!((relevance(&many, &context) - BASE).abs() < 1e-9);
    }
}
