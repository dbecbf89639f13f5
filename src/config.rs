use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{QualityError, Result};
use crate::scoring::MetricWeights;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Metrics at or above this value are listed as strengths.
    pub strength_threshold: f64,
    /// Metrics below this value are listed as weaknesses.
    pub weakness_threshold: f64,
    /// Metrics below this value pull in their suggestion tier.
    pub suggestion_threshold: f64,
    /// Overall scores below this add the generic suggestion tier.
    pub fallback_score: u8,
    pub max_suggestions: usize,
    pub max_key_points: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            strength_threshold: 0.8,
            weakness_threshold: 0.5,
            suggestion_threshold: 0.7,
            fallback_score: 70,
            max_suggestions: 8,
            max_key_points: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_input_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 4000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: MetricWeights,
    pub feedback: FeedbackConfig,
    pub limits: LimitsConfig,
}

impl ScoringConfig {
    /// Reads the config file when it exists, otherwise starts from defaults; env overrides apply
    /// either way. Returns the path that was consulted.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::read(path)?,
            Some(path) => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                ScoringConfig::default()
            }
            None => ScoringConfig::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok((config, config_path))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| QualityError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| QualityError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| QualityError::ConfigWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(|source| QualityError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("coherence", self.weights.coherence),
            ("relevance", self.weights.relevance),
            ("clarity", self.weights.clarity),
            ("engagement", self.weights.engagement),
            ("completeness", self.weights.completeness),
            ("structure", self.weights.structure),
            ("tone", self.weights.tone),
            ("length", self.weights.length),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(QualityError::InvalidConfig(format!(
                    "weights.{name} must be a non-negative number, got {weight}"
                )));
            }
        }
        if self.weights.total() <= 0.0 {
            return Err(QualityError::InvalidConfig(
                "at least one metric weight must be positive".to_string(),
            ));
        }

        let thresholds = [
            ("strength_threshold", self.feedback.strength_threshold),
            ("weakness_threshold", self.feedback.weakness_threshold),
            ("suggestion_threshold", self.feedback.suggestion_threshold),
        ];
        for (name, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(QualityError::InvalidConfig(format!(
                    "feedback.{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.feedback.fallback_score > 100 {
            return Err(QualityError::InvalidConfig(format!(
                "feedback.fallback_score must be at most 100, got {}",
                self.feedback.fallback_score
            )));
        }
        if self.feedback.max_suggestions == 0 || self.feedback.max_key_points == 0 {
            return Err(QualityError::InvalidConfig(
                "feedback caps must be positive".to_string(),
            ));
        }
        if self.limits.max_input_chars == 0 {
            return Err(QualityError::InvalidConfig(
                "limits.max_input_chars must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(limit) = env::var("QUALITY_MAX_INPUT_CHARS") {
            match limit.trim().parse::<usize>() {
                Ok(value) => self.limits.max_input_chars = value,
                Err(_) => tracing::warn!(value = %limit, "ignoring invalid QUALITY_MAX_INPUT_CHARS"),
            }
        }
        if let Ok(cap) = env::var("QUALITY_MAX_SUGGESTIONS") {
            match cap.trim().parse::<usize>() {
                Ok(value) => self.feedback.max_suggestions = value,
                Err(_) => tracing::warn!(value = %cap, "ignoring invalid QUALITY_MAX_SUGGESTIONS"),
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("QUALITY_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/quality.toml")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quality.toml");
        std::fs::write(&path, "[feedback]\nmax_suggestions = 3\n").unwrap();

        let config = ScoringConfig::read(&path).unwrap();
        assert_eq!(config.feedback.max_suggestions, 3);
        assert_eq!(config.feedback.fallback_score, 70);
        assert_eq!(config.weights, MetricWeights::default());
        assert_eq!(config.limits.max_input_chars, 4000);
    }

    #[test]
    fn write_then_read_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("quality.toml");
        let mut config = ScoringConfig::default();
        config.weights.tone = 0.1;
        config.limits.max_input_chars = 280;

        config.write(&path).unwrap();
        assert_eq!(ScoringConfig::read(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quality.toml");
        std::fs::write(&path, "[weights\ncoherence = ").unwrap();
        let err = ScoringConfig::read(&path).unwrap_err();
        assert!(matches!(err, QualityError::ConfigParse { .. }));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = ScoringConfig::default();
        config.weights.relevance = -0.3;
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.feedback.strength_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.feedback.max_suggestions = 0;
        assert!(config.validate().is_err());

        assert!(ScoringConfig::default().validate().is_ok());
    }
}
