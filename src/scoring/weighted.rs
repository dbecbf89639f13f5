use serde::{Deserialize, Serialize};

use crate::{Metric, QualityMetrics};

/// Weights of the overall score. Metrics left at zero are reported but do not move the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricWeights {
    pub coherence: f64,
    pub relevance: f64,
    pub clarity: f64,
    pub engagement: f64,
    pub completeness: f64,
    pub structure: f64,
    pub tone: f64,
    pub length: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            coherence: 0.40,
            relevance: 0.30,
            clarity: 0.15,
            engagement: 0.15,
            completeness: 0.0,
            structure: 0.0,
            tone: 0.0,
            length: 0.0,
        }
    }
}

impl MetricWeights {
    pub fn weight(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Coherence => self.coherence,
            Metric::Relevance => self.relevance,
            Metric::Clarity => self.clarity,
            Metric::Engagement => self.engagement,
            Metric::Completeness => self.completeness,
            Metric::Structure => self.structure,
            Metric::Tone => self.tone,
            Metric::Length => self.length,
        }
    }

    pub fn total(&self) -> f64 {
        WEIGHT_ORDER.iter().map(|metric| self.weight(*metric)).sum()
    }
}

// Summation order of the overall score: weighted metrics first.
const WEIGHT_ORDER: [Metric; 8] = [
    Metric::Coherence,
    Metric::Relevance,
    Metric::Clarity,
    Metric::Engagement,
    Metric::Completeness,
    Metric::Structure,
    Metric::Tone,
    Metric::Length,
];

#[derive(Debug, Clone, Default)]
pub struct WeightedScorer {
    weights: MetricWeights,
}

impl WeightedScorer {
    pub fn new(weights: MetricWeights) -> Self {
        Self { weights }
    }

    /// Weighted mean of the metrics in [0,1]; 0 when no weight is positive.
    pub fn score(&self, metrics: &QualityMetrics) -> f64 {
        let mut total = 0.0;
        let mut total_weight = 0.0;

        for metric in WEIGHT_ORDER {
            let weight = self.weights.weight(metric);
            if !weight.is_finite() || weight <= 0.0 {
                continue;
            }
            total += metrics.get(metric) * weight;
            total_weight += weight;
        }

        if total_weight <= 0.0 {
            return 0.0;
        }
        total / total_weight
    }

    /// `score` on the 0-100 scale, rounded half up.
    pub fn overall(&self, metrics: &QualityMetrics) -> u8 {
        let scaled = (self.score(metrics) * 100.0).round();
        if scaled.is_nan() {
            return 0;
        }
        scaled.clamp(0.0, 100.0) as u8
    }
}
