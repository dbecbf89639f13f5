use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Conversation,
    Analysis,
    CustomerService,
    Review,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Conversation,
        ContentType::Analysis,
        ContentType::CustomerService,
        ContentType::Review,
    ];

    /// Resolves a content-type key by exact match. Anything else (`general`, `Review`,
    /// `customer-service`) is scored as a conversation.
    pub fn from_key(value: &str) -> Self {
        match value {
            "analysis" => ContentType::Analysis,
            "customer_service" => ContentType::CustomerService,
            "review" => ContentType::Review,
            _ => ContentType::Conversation,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ContentType::Conversation => "conversation",
            ContentType::Analysis => "analysis",
            ContentType::CustomerService => "customer_service",
            ContentType::Review => "review",
        }
    }

    pub fn profile(self) -> &'static ContentProfile {
        match self {
            ContentType::Conversation => &CONVERSATION,
            ContentType::Analysis => &ANALYSIS,
            ContentType::CustomerService => &CUSTOMER_SERVICE,
            ContentType::Review => &REVIEW,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Friendly,
    Casual,
    Engaging,
    Professional,
    Objective,
    Detailed,
    Empathetic,
    Helpful,
    Personal,
    Authentic,
    Informative,
    Formal,
}

impl Tone {
    /// Words that mark the tone. Tones with an empty list are expected but never detected.
    pub fn indicators(self) -> &'static [&'static str] {
        match self {
            Tone::Professional => &[
                "professional",
                "expert",
                "analysis",
                "recommendation",
                "assessment",
            ],
            Tone::Casual => &["cool", "awesome", "great", "nice", "fun"],
            Tone::Friendly => &["hello", "hi", "thanks", "appreciate", "welcome"],
            Tone::Empathetic => &["understand", "sorry", "apologize", "care", "concern"],
            Tone::Formal => &["therefore", "consequently", "furthermore", "moreover", "thus"],
            Tone::Engaging
            | Tone::Objective
            | Tone::Detailed
            | Tone::Helpful
            | Tone::Personal
            | Tone::Authentic
            | Tone::Informative => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequiredElement {
    pub key: &'static str,
    pub synonyms: &'static [&'static str],
}

impl RequiredElement {
    /// Present when any underscore-separated part of the key, or any synonym, occurs in `lower`.
    pub fn is_present(&self, lower: &str) -> bool {
        self.key.split('_').any(|part| lower.contains(part))
            || self.synonyms.iter().any(|synonym| lower.contains(synonym))
    }
}

/// Inclusive word-count band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthBand {
    pub min: usize,
    pub max: usize,
}

impl LengthBand {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: usize) -> bool {
        value >= self.min && value <= self.max
    }

    /// True when `value` lies in the band stretched to `min * low` ..= `max * high`.
    pub fn contains_scaled(&self, value: usize, low: f64, high: f64) -> bool {
        let value = value as f64;
        value >= self.min as f64 * low && value <= self.max as f64 * high
    }

    /// 1.0 inside the band, then 0.8 / 0.6 for 20% / 40% slack, else 0.3.
    pub fn fit_score(&self, value: usize) -> f64 {
        if self.contains(value) {
            1.0
        } else if self.contains_scaled(value, 0.8, 1.2) {
            0.8
        } else if self.contains_scaled(value, 0.6, 1.4) {
            0.6
        } else {
            0.3
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProfile {
    pub content_type: ContentType,
    pub required_elements: &'static [RequiredElement],
    pub optimal_length: LengthBand,
    pub expected_tones: &'static [Tone],
    pub expected_structure: &'static [&'static str],
}

static CONVERSATION: ContentProfile = ContentProfile {
    content_type: ContentType::Conversation,
    required_elements: &[
        RequiredElement {
            key: "greeting",
            synonyms: &["hello", "hi", "hey", "welcome"],
        },
        RequiredElement {
            key: "main_content",
            synonyms: &["content", "information", "details", "explanation"],
        },
        RequiredElement {
            key: "engagement",
            synonyms: &["interaction", "participation", "involvement"],
        },
    ],
    optimal_length: LengthBand::new(50, 200),
    expected_tones: &[Tone::Friendly, Tone::Casual, Tone::Engaging],
    expected_structure: &["opening", "body", "closing"],
};

static ANALYSIS: ContentProfile = ContentProfile {
    content_type: ContentType::Analysis,
    required_elements: &[
        RequiredElement {
            key: "summary",
            synonyms: &["overview", "recap", "summary", "brief"],
        },
        RequiredElement {
            key: "key_points",
            synonyms: &["main points", "important points", "key findings"],
        },
        RequiredElement {
            key: "insights",
            synonyms: &["observations", "findings", "discoveries"],
        },
        RequiredElement {
            key: "recommendations",
            synonyms: &["suggestions", "advice", "recommendations"],
        },
    ],
    optimal_length: LengthBand::new(150, 500),
    expected_tones: &[Tone::Professional, Tone::Objective, Tone::Detailed],
    expected_structure: &["executive_summary", "detailed_analysis", "conclusions"],
};

static CUSTOMER_SERVICE: ContentProfile = ContentProfile {
    content_type: ContentType::CustomerService,
    required_elements: &[
        RequiredElement {
            key: "acknowledgment",
            synonyms: &["understand", "recognize", "acknowledge"],
        },
        RequiredElement {
            key: "understanding",
            synonyms: &["comprehend", "grasp", "understand"],
        },
        RequiredElement {
            key: "solution",
            synonyms: &["resolve", "fix", "address", "solve"],
        },
        RequiredElement {
            key: "follow_up",
            synonyms: &["next steps", "follow up", "continue"],
        },
    ],
    optimal_length: LengthBand::new(100, 300),
    expected_tones: &[Tone::Empathetic, Tone::Professional, Tone::Helpful],
    expected_structure: &["empathy", "problem_understanding", "solution", "next_steps"],
};

static REVIEW: ContentProfile = ContentProfile {
    content_type: ContentType::Review,
    required_elements: &[
        RequiredElement {
            key: "experience",
            synonyms: &[],
        },
        RequiredElement {
            key: "highlights",
            synonyms: &[],
        },
        RequiredElement {
            key: "details",
            synonyms: &[],
        },
        RequiredElement {
            key: "recommendation",
            synonyms: &[],
        },
    ],
    optimal_length: LengthBand::new(100, 400),
    expected_tones: &[Tone::Personal, Tone::Authentic, Tone::Informative],
    expected_structure: &["context", "experience", "evaluation", "recommendation"],
};
