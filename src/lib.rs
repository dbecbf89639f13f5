pub mod config;
pub mod context;
pub mod error;
pub mod feedback;
pub mod insights;
pub mod lexicon;
pub mod platform;
pub mod profiles;
pub mod scoring;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::config::{LimitsConfig, ScoringConfig};
use crate::context::AnalysisContext;
use crate::error::{QualityError, Result};
use crate::insights::{PatternAnalysis, StructureAnalysis};
use crate::platform::{
    platform_score, platform_suggestions, Platform, PlatformMetrics, PlatformOptimization,
    PlatformSignals,
};
use crate::profiles::ContentType;
use crate::scoring::{MetricPipeline, WeightedScorer};
use crate::text::TextFeatures;

pub use crate::insights::{Complexity, Sentiment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Coherence,
    Relevance,
    Completeness,
    Clarity,
    Engagement,
    Structure,
    Tone,
    Length,
}

impl Metric {
    /// Declaration order; strengths and weaknesses are listed in this order.
    pub const ALL: [Metric; 8] = [
        Metric::Coherence,
        Metric::Relevance,
        Metric::Completeness,
        Metric::Clarity,
        Metric::Engagement,
        Metric::Structure,
        Metric::Tone,
        Metric::Length,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Coherence => "coherence",
            Metric::Relevance => "relevance",
            Metric::Completeness => "completeness",
            Metric::Clarity => "clarity",
            Metric::Engagement => "engagement",
            Metric::Structure => "structure",
            Metric::Tone => "tone",
            Metric::Length => "length",
        }
    }
}

/// The eight sub-metrics, each in [0,1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub coherence: f64,
    pub relevance: f64,
    pub completeness: f64,
    pub clarity: f64,
    pub engagement: f64,
    pub structure: f64,
    pub tone: f64,
    pub length: f64,
}

impl QualityMetrics {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Coherence => self.coherence,
            Metric::Relevance => self.relevance,
            Metric::Completeness => self.completeness,
            Metric::Clarity => self.clarity,
            Metric::Engagement => self.engagement,
            Metric::Structure => self.structure,
            Metric::Tone => self.tone,
            Metric::Length => self.length,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |metric| (metric, self.get(metric)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub content_type: ContentType,
    pub overall_score: u8,
    pub metrics: QualityMetrics,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub pattern_analysis: PatternAnalysis,
    pub structure_analysis: StructureAnalysis,
    pub key_points: Vec<String>,
    pub sentiment: Sentiment,
    pub complexity: Complexity,
}

/// A quality report extended with platform-specific metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformReport {
    pub platform: &'static str,
    #[serde(flatten)]
    pub quality: QualityReport,
    pub platform_score: u8,
    pub platform_metrics: PlatformMetrics,
    pub platform_optimization: PlatformOptimization,
    pub platform_suggestions: Vec<String>,
}

/// Scores `text` with the default policy. Pure: no config files or environment are read.
pub fn analyze(text: &str, content_type: &str, context: &AnalysisContext) -> QualityReport {
    analyze_with_config(text, content_type, context, &ScoringConfig::default())
}

pub fn analyze_with_config(
    text: &str,
    content_type: &str,
    context: &AnalysisContext,
    config: &ScoringConfig,
) -> QualityReport {
    let features = TextFeatures::extract(text);
    analyze_features(&features, ContentType::from_key(content_type), context, config)
}

pub fn analyze_for_platform(
    text: &str,
    platform: Platform,
    post_type: &str,
    context: &AnalysisContext,
    config: &ScoringConfig,
) -> PlatformReport {
    let features = TextFeatures::extract(text);
    let quality = analyze_features(&features, ContentType::from_key(post_type), context, config);

    let profile = platform.profile();
    let signals = PlatformSignals::extract(&features);
    let platform_metrics = PlatformMetrics::compute(&features, &signals, profile);
    let platform_optimization = PlatformOptimization::assess(&signals, profile);

    PlatformReport {
        platform: profile.name,
        quality,
        platform_score: platform_score(&platform_metrics, profile),
        platform_suggestions: platform_suggestions(&platform_optimization, profile),
        platform_metrics,
        platform_optimization,
    }
}

fn analyze_features(
    features: &TextFeatures,
    content_type: ContentType,
    context: &AnalysisContext,
    config: &ScoringConfig,
) -> QualityReport {
    let pipeline = build_pipeline(config);
    let scored = pipeline.score(features, content_type.profile(), context);
    let feedback_config = &config.feedback;

    QualityReport {
        content_type,
        overall_score: scored.overall_score,
        metrics: scored.metrics,
        strengths: feedback::strengths(&scored.metrics, feedback_config),
        weaknesses: feedback::weaknesses(&scored.metrics, feedback_config),
        suggestions: feedback::suggestions(&scored.metrics, scored.overall_score, feedback_config),
        pattern_analysis: PatternAnalysis::detect(features),
        structure_analysis: StructureAnalysis::measure(features),
        key_points: insights::key_points(features, feedback_config.max_key_points),
        sentiment: Sentiment::classify(features),
        complexity: Complexity::classify(features),
    }
}

fn build_pipeline(config: &ScoringConfig) -> MetricPipeline {
    MetricPipeline::new(WeightedScorer::new(config.weights.clone()))
}

/// Rejects blank or oversized input before it reaches the engine.
pub fn validate_input(text: &str, limits: &LimitsConfig) -> Result<()> {
    if text.trim().is_empty() {
        return Err(QualityError::EmptyInput);
    }
    let actual = text.chars().count();
    if actual > limits.max_input_chars {
        return Err(QualityError::InputTooLong {
            actual,
            limit: limits.max_input_chars,
        });
    }
    Ok(())
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
