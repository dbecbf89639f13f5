pub mod analyzer;
pub mod profiles;

use serde::Serialize;

pub use analyzer::{
    platform_score, platform_suggestions, OptimizationStatus, PlatformMetrics,
    PlatformOptimization, PlatformSignals,
};
pub use profiles::{EmojiUsage, Platform, PlatformProfile, Signal};

use crate::profiles::LengthBand;

/// Publishing guidance for one platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub platform: &'static str,
    pub character_limit: usize,
    pub optimal_length: LengthBand,
    pub hashtag_limit: LengthBand,
    pub emoji_usage: EmojiUsage,
    pub tone_preferences: &'static [&'static str],
    pub content_types: &'static [&'static str],
    pub engagement_phrases: &'static [&'static str],
    pub best_practices: &'static [&'static str],
}

pub fn recommendations(platform: Platform) -> Recommendations {
    let profile = platform.profile();
    Recommendations {
        platform: profile.name,
        character_limit: profile.character_limit,
        optimal_length: profile.optimal_length,
        hashtag_limit: profile.hashtag_limit,
        emoji_usage: profile.emoji_usage,
        tone_preferences: profile.tone_preferences,
        content_types: profile.content_types,
        engagement_phrases: profile.engagement_phrases,
        best_practices: &profile.best_practices,
    }
}
