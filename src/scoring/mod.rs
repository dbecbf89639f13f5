pub mod clarity;
pub mod coherence;
pub mod engagement;
pub mod fit;
pub mod pipeline;
pub mod relevance;
pub mod weighted;

pub use coherence::CoherenceSignals;
pub use pipeline::{MetricPipeline, ScoredResponse};
pub use weighted::{MetricWeights, WeightedScorer};

/// Clamps to [0,1]; NaN counts as no signal.
pub(crate) fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
