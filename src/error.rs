use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QualityError {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to write config {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("Response text is required")]
    EmptyInput,

    #[error("response is {actual} characters; the limit is {limit}")]
    InputTooLong { actual: usize, limit: usize },

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
}

impl QualityError {
    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            QualityError::ConfigRead { .. }
            | QualityError::ConfigParse { .. }
            | QualityError::ConfigSerialize(_)
            | QualityError::ConfigWrite { .. }
            | QualityError::InvalidConfig(_) => "CONFIG_ERROR",
            QualityError::EmptyInput => "EMPTY_INPUT",
            QualityError::InputTooLong { .. } => "INPUT_TOO_LONG",
            QualityError::UnknownPlatform(_) => "UNKNOWN_PLATFORM",
        }
    }
}

pub type Result<T, E = QualityError> = std::result::Result<T, E>;
