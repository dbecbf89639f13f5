//! Fixed word lists behind the lexical heuristics.
//!
//! Matching is case-insensitive substring matching against the lowercased text unless a
//! caller says otherwise, so short entries such as `as` or `so` also fire inside longer words.

/// Connectors that signal a deliberate move from one sentence to the next.
pub const TRANSITIONS: &[&str] = &[
    "however",
    "therefore",
    "furthermore",
    "moreover",
    "in addition",
    "consequently",
    "as a result",
    "meanwhile",
    "subsequently",
    "next",
    "then",
    "also",
    "besides",
    "additionally",
    "further",
    "similarly",
    "likewise",
    "in contrast",
    "on the other hand",
    "first",
    "second",
    "third",
    "finally",
    "in conclusion",
    "to summarize",
];

/// Answers to a preceding question.
pub const CAUSAL_CONNECTORS: &[&str] = &["because", "since", "as", "due to"];

/// Cause side of a cause -> effect pair.
pub const CAUSE_MARKERS: &[&str] = &["because", "since", "as a result"];

/// Effect side of a cause -> effect pair.
pub const EFFECT_MARKERS: &[&str] = &["therefore", "consequently", "this means", "so"];

pub const CONCLUSION_CUES: &[&str] = &["in conclusion", "finally", "to summarize"];

pub const ENGAGEMENT_ELEMENTS: &[&str] = &[
    "click",
    "share",
    "comment",
    "like",
    "follow",
    "visit",
    "learn more",
    "discover",
];

pub const BUSINESS_TERMS: &[&str] = &[
    "strategy",
    "growth",
    "efficiency",
    "results",
    "professional",
    "industry",
    "market",
];

pub const FAMILY_TERMS: &[&str] = &[
    "family", "children", "kids", "parent", "home", "together", "fun", "safe",
];

pub const FOOD_TERMS: &[&str] = &[
    "delicious",
    "flavor",
    "cuisine",
    "ingredients",
    "taste",
    "dining",
    "restaurant",
    "chef",
];

pub const FACEBOOK_TERMS: &[&str] = &[
    "community",
    "share",
    "story",
    "experience",
    "friends",
    "family",
    "together",
];

pub const INSTAGRAM_TERMS: &[&str] = &[
    "beautiful",
    "amazing",
    "stunning",
    "perfect",
    "lifestyle",
    "aesthetic",
    "visual",
];

pub const LINKEDIN_TERMS: &[&str] = &[
    "professional",
    "career",
    "industry",
    "business",
    "leadership",
    "expertise",
    "network",
];

/// Vocabulary that hurts clarity.
pub const COMPLEX_WORDS: &[&str] = &[
    "notwithstanding",
    "aforementioned",
    "subsequently",
    "consequently",
    "furthermore",
];

/// Vocabulary that pushes the complexity label up. Wider than [`COMPLEX_WORDS`].
pub const COMPLEXITY_WORDS: &[&str] = &[
    "notwithstanding",
    "aforementioned",
    "subsequently",
    "consequently",
    "furthermore",
    "moreover",
    "therefore",
];

pub const PASSIVE_MARKERS: &[&str] = &[
    "is being",
    "are being",
    "was being",
    "were being",
    "has been",
    "have been",
];

pub const PERSONAL_PRONOUNS: &[&str] = &["you", "your", "we", "our", "us"];

pub const EMOTIONAL_WORDS: &[&str] = &[
    "amazing",
    "fantastic",
    "wonderful",
    "excellent",
    "great",
    "love",
    "enjoy",
    "appreciate",
];

pub const SOFT_CALLS_TO_ACTION: &[&str] = &["try", "consider", "think about", "imagine", "suppose"];

pub const STRUCTURAL_INDICATORS: &[&str] = &[
    "first",
    "second",
    "third",
    "finally",
    "in conclusion",
    "to summarize",
    "overall",
];

pub const KEY_INDICATORS: &[&str] = &[
    "important",
    "key",
    "main",
    "primary",
    "essential",
    "critical",
    "significant",
    "notable",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "amazing",
    "excellent",
    "wonderful",
    "fantastic",
    "love",
    "like",
    "happy",
    "satisfied",
    "pleased",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "disappointed",
    "angry",
    "frustrated",
    "upset",
    "unhappy",
];
