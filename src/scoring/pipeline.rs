use crate::context::AnalysisContext;
use crate::profiles::ContentProfile;
use crate::scoring::{clarity, coherence, engagement, fit, relevance, WeightedScorer};
use crate::text::TextFeatures;
use crate::QualityMetrics;

/// Metrics plus the overall score derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResponse {
    pub metrics: QualityMetrics,
    pub overall_score: u8,
}

#[derive(Debug, Clone, Default)]
pub struct MetricPipeline {
    weighted_scorer: WeightedScorer,
}

impl MetricPipeline {
    pub fn new(weighted_scorer: WeightedScorer) -> Self {
        Self { weighted_scorer }
    }

    pub fn metrics(
        &self,
        features: &TextFeatures,
        profile: &ContentProfile,
        context: &AnalysisContext,
    ) -> QualityMetrics {
        QualityMetrics {
            coherence: coherence::coherence(features),
            relevance: relevance::relevance(features, context),
            completeness: fit::completeness(features, profile),
            clarity: clarity::clarity(features),
            engagement: engagement::engagement(features),
            structure: fit::structure(features),
            tone: fit::tone(features, profile),
            length: fit::length(features, profile),
        }
    }

    pub fn score(
        &self,
        features: &TextFeatures,
        profile: &ContentProfile,
        context: &AnalysisContext,
    ) -> ScoredResponse {
        let metrics = self.metrics(features, profile, context);
        let overall_score = self.weighted_scorer.overall(&metrics);
        ScoredResponse {
            metrics,
            overall_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::ContentType;

    #[test]
    fn blank_text_yields_baselines() {
        let features = TextFeatures::extract("   \n ");
        let scored = MetricPipeline::default().score(
            &features,
            ContentType::Conversation.profile(),
            &AnalysisContext::new(),
        );
        assert_eq!(scored.metrics.relevance, 0.5);
        assert_eq!(scored.metrics.coherence, 0.0);
        assert_eq!(scored.metrics.length, 0.0);
        // only relevance contributes: 0.30 * 0.5
        assert_eq!(scored.overall_score, 15);
    }
}
