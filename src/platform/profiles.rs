use serde::{Deserialize, Serialize};

use crate::profiles::LengthBand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Tiktok,
    Youtube,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Tiktok,
        Platform::Youtube,
    ];

    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "instagram" => Some(Platform::Instagram),
            "facebook" => Some(Platform::Facebook),
            "twitter" | "x" => Some(Platform::Twitter),
            "linkedin" => Some(Platform::Linkedin),
            "tiktok" => Some(Platform::Tiktok),
            "youtube" => Some(Platform::Youtube),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
        }
    }

    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::Instagram => &INSTAGRAM,
            Platform::Facebook => &FACEBOOK,
            Platform::Twitter => &TWITTER,
            Platform::Linkedin => &LINKEDIN,
            Platform::Tiktok => &TIKTOK,
            Platform::Youtube => &YOUTUBE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiUsage {
    High,
    Moderate,
    Low,
}

/// Engagement signals a platform weighs when computing its platform score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Signal {
    Hashtags,
    Emojis,
    Questions,
    CallToAction,
    PersonalStory,
    Community,
    Mentions,
    Trending,
    Brevity,
    ProfessionalInsight,
    IndustryRelevance,
    ThoughtLeadership,
    Networking,
    VideoDescription,
    Timestamps,
    Links,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalWeight {
    pub signal: Signal,
    pub weight: f64,
}

const fn weight(signal: Signal, weight: f64) -> SignalWeight {
    SignalWeight { signal, weight }
}

/// Platform tone names and the words that mark them. Tones missing here are never detected.
pub fn tone_indicators(tone: &str) -> &'static [&'static str] {
    match tone {
        "professional" => &["professional", "industry", "business", "strategy", "leadership"],
        "friendly" => &["hello", "hi", "thanks", "appreciate", "welcome"],
        "authentic" => &["real", "honest", "genuine", "authentic", "truth"],
        "inspirational" => &["inspire", "motivate", "dream", "achieve", "success"],
        "informative" => &["learn", "discover", "explore", "understand", "knowledge"],
        "entertaining" => &["fun", "amazing", "incredible", "awesome", "exciting"],
        "trendy" => &["trending", "viral", "hot", "popular", "latest"],
        "concise" => &["brief", "quick", "simple", "direct", "clear"],
        _ => &[],
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformProfile {
    pub platform: Platform,
    pub name: &'static str,
    pub character_limit: usize,
    pub optimal_length: LengthBand,
    pub hashtag_limit: LengthBand,
    pub emoji_usage: EmojiUsage,
    pub visual_focus: bool,
    pub signal_weights: &'static [SignalWeight],
    pub tone_preferences: &'static [&'static str],
    pub content_types: &'static [&'static str],
    pub hashtag_categories: &'static [&'static str],
    pub community_keywords: &'static [&'static str],
    pub trending_keywords: &'static [&'static str],
    pub professional_keywords: &'static [&'static str],
    /// Words that suit a visual-first feed; empty when the platform has none.
    pub visual_keywords: &'static [&'static str],
    pub engagement_phrases: &'static [&'static str],
    pub tips: [&'static str; 3],
    pub best_practices: [&'static str; 5],
    /// Average word length the character-efficiency score aims for.
    pub optimal_word_length: f64,
}

static INSTAGRAM: PlatformProfile = PlatformProfile {
    platform: Platform::Instagram,
    name: "Instagram",
    character_limit: 2200,
    optimal_length: LengthBand::new(50, 150),
    hashtag_limit: LengthBand::new(5, 30),
    emoji_usage: EmojiUsage::High,
    visual_focus: true,
    signal_weights: &[
        weight(Signal::Hashtags, 0.25),
        weight(Signal::Emojis, 0.20),
        weight(Signal::Questions, 0.20),
        weight(Signal::CallToAction, 0.15),
        weight(Signal::PersonalStory, 0.20),
    ],
    tone_preferences: &["authentic", "personal", "inspirational", "aspirational"],
    content_types: &["lifestyle", "product", "behind-the-scenes", "user-generated"],
    hashtag_categories: &["brand", "niche", "trending", "location", "community"],
    community_keywords: &[],
    trending_keywords: &[],
    professional_keywords: &[],
    visual_keywords: &[
        "beautiful",
        "stunning",
        "amazing",
        "perfect",
        "gorgeous",
        "incredible",
    ],
    engagement_phrases: &[
        "double tap",
        "save this",
        "share with friends",
        "comment below",
        "tag a friend",
    ],
    tips: [
        "Use relevant hashtags in your niche for better discoverability",
        "Include a clear call-to-action to encourage engagement",
        "Share personal stories to build authentic connections",
    ],
    best_practices: [
        "Use high-quality visuals with your posts",
        "Post consistently at optimal times",
        "Engage with your audience through comments",
        "Use Instagram Stories for behind-the-scenes content",
        "Collaborate with influencers in your niche",
    ],
    optimal_word_length: 5.5,
};

static FACEBOOK: PlatformProfile = PlatformProfile {
    platform: Platform::Facebook,
    name: "Facebook",
    character_limit: 63206,
    optimal_length: LengthBand::new(100, 300),
    hashtag_limit: LengthBand::new(0, 5),
    emoji_usage: EmojiUsage::Moderate,
    visual_focus: false,
    signal_weights: &[
        weight(Signal::Community, 0.30),
        weight(Signal::PersonalStory, 0.25),
        weight(Signal::Questions, 0.20),
        weight(Signal::CallToAction, 0.15),
        weight(Signal::Hashtags, 0.10),
    ],
    tone_preferences: &["friendly", "community-focused", "informative", "supportive"],
    content_types: &["community", "news", "personal", "business", "events"],
    hashtag_categories: &["community", "local", "business", "events"],
    community_keywords: &["community", "together", "friends", "family", "support", "share"],
    trending_keywords: &[],
    professional_keywords: &[],
    visual_keywords: &[],
    engagement_phrases: &[
        "share your thoughts",
        "what do you think",
        "join the conversation",
        "tag someone who needs this",
    ],
    tips: [
        "Focus on community-building and personal connections",
        "Ask questions to encourage comments and discussions",
        "Share valuable information that helps your audience",
    ],
    best_practices: [
        "Focus on community engagement",
        "Share valuable, informative content",
        "Use Facebook Live for real-time engagement",
        "Create Facebook Groups for deeper community building",
        "Respond to comments and messages promptly",
    ],
    optimal_word_length: 5.5,
};

static TWITTER: PlatformProfile = PlatformProfile {
    platform: Platform::Twitter,
    name: "Twitter",
    character_limit: 280,
    optimal_length: LengthBand::new(50, 250),
    hashtag_limit: LengthBand::new(1, 3),
    emoji_usage: EmojiUsage::Moderate,
    visual_focus: false,
    signal_weights: &[
        weight(Signal::Hashtags, 0.30),
        weight(Signal::Mentions, 0.25),
        weight(Signal::Questions, 0.20),
        weight(Signal::Trending, 0.15),
        weight(Signal::Brevity, 0.10),
    ],
    tone_preferences: &["concise", "informative", "engaging", "trending"],
    content_types: &["news", "opinion", "trending", "conversation", "announcement"],
    hashtag_categories: &["trending", "niche", "brand", "conversation"],
    community_keywords: &[],
    trending_keywords: &["breaking", "update", "announcement", "trending", "viral"],
    professional_keywords: &[],
    visual_keywords: &[],
    engagement_phrases: &[
        "retweet if you agree",
        "quote tweet with your thoughts",
        "follow for more",
        "thread coming",
    ],
    tips: [
        "Use trending hashtags to join relevant conversations",
        "Keep your message concise and impactful",
        "Include mentions to engage with others in your industry",
    ],
    best_practices: [
        "Join trending conversations with relevant hashtags",
        "Retweet and engage with industry leaders",
        "Use Twitter threads for longer content",
        "Monitor and respond to mentions",
        "Post consistently throughout the day",
    ],
    optimal_word_length: 4.5,
};

static LINKEDIN: PlatformProfile = PlatformProfile {
    platform: Platform::Linkedin,
    name: "LinkedIn",
    character_limit: 3000,
    optimal_length: LengthBand::new(200, 600),
    hashtag_limit: LengthBand::new(3, 10),
    emoji_usage: EmojiUsage::Low,
    visual_focus: false,
    signal_weights: &[
        weight(Signal::ProfessionalInsight, 0.35),
        weight(Signal::IndustryRelevance, 0.25),
        weight(Signal::ThoughtLeadership, 0.20),
        weight(Signal::Networking, 0.15),
        weight(Signal::Hashtags, 0.05),
    ],
    tone_preferences: &["professional", "thoughtful", "insightful", "authoritative"],
    content_types: &[
        "industry-insights",
        "career-advice",
        "business-updates",
        "professional-development",
    ],
    hashtag_categories: &["industry", "professional", "business", "leadership"],
    community_keywords: &[],
    trending_keywords: &[],
    professional_keywords: &[
        "industry",
        "leadership",
        "strategy",
        "growth",
        "innovation",
        "expertise",
    ],
    visual_keywords: &[],
    engagement_phrases: &[
        "what are your thoughts",
        "share your experience",
        "connect with me",
        "let's discuss",
    ],
    tips: [
        "Share professional insights and industry knowledge",
        "Use industry-specific hashtags for better visibility",
        "Focus on thought leadership and professional development",
    ],
    best_practices: [
        "Share professional insights and industry knowledge",
        "Publish LinkedIn articles for thought leadership",
        "Engage with industry professionals",
        "Use LinkedIn polls for audience insights",
        "Share company updates and achievements",
    ],
    optimal_word_length: 5.5,
};

static TIKTOK: PlatformProfile = PlatformProfile {
    platform: Platform::Tiktok,
    name: "TikTok",
    character_limit: 150,
    optimal_length: LengthBand::new(20, 100),
    hashtag_limit: LengthBand::new(3, 8),
    emoji_usage: EmojiUsage::High,
    visual_focus: true,
    signal_weights: &[
        weight(Signal::Trending, 0.30),
        weight(Signal::Hashtags, 0.25),
        weight(Signal::Emojis, 0.20),
        weight(Signal::CallToAction, 0.15),
        weight(Signal::Brevity, 0.10),
    ],
    tone_preferences: &["fun", "trendy", "authentic", "entertaining"],
    content_types: &["trending", "entertainment", "educational", "challenge", "duet"],
    hashtag_categories: &["trending", "challenge", "niche", "fyp"],
    community_keywords: &[],
    trending_keywords: &["trending", "viral", "fyp", "challenge", "duet"],
    professional_keywords: &[],
    visual_keywords: &[],
    engagement_phrases: &[
        "follow for more",
        "duet this",
        "save this",
        "share with friends",
    ],
    tips: [
        "Use trending sounds and hashtags",
        "Keep your caption short and engaging",
        "Include a clear call-to-action for engagement",
    ],
    best_practices: [
        "Use trending sounds and hashtags",
        "Create authentic, entertaining content",
        "Post consistently to build momentum",
        "Engage with comments and duets",
        "Follow current trends and challenges",
    ],
    optimal_word_length: 5.5,
};

static YOUTUBE: PlatformProfile = PlatformProfile {
    platform: Platform::Youtube,
    name: "YouTube",
    character_limit: 5000,
    optimal_length: LengthBand::new(100, 500),
    hashtag_limit: LengthBand::new(5, 15),
    emoji_usage: EmojiUsage::Moderate,
    visual_focus: true,
    signal_weights: &[
        weight(Signal::VideoDescription, 0.30),
        weight(Signal::CallToAction, 0.25),
        weight(Signal::Hashtags, 0.20),
        weight(Signal::Timestamps, 0.15),
        weight(Signal::Links, 0.10),
    ],
    tone_preferences: &["informative", "entertaining", "educational", "engaging"],
    content_types: &["tutorial", "review", "entertainment", "educational", "vlog"],
    hashtag_categories: &["content-type", "niche", "trending", "brand"],
    community_keywords: &[],
    trending_keywords: &[],
    professional_keywords: &[],
    visual_keywords: &["subscribe", "like", "comment", "share", "bell", "notification"],
    engagement_phrases: &[
        "subscribe for more",
        "hit the like button",
        "comment below",
        "share with friends",
    ],
    tips: [
        "Include timestamps for longer videos",
        "Add relevant links in your description",
        "Use keywords that match your video content",
    ],
    best_practices: [
        "Optimize video titles and descriptions with keywords",
        "Create engaging thumbnails",
        "Use end screens and cards for engagement",
        "Respond to comments to build community",
        "Collaborate with other creators",
    ],
    optimal_word_length: 5.5,
};
