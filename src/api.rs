use axum::{http::StatusCode, Json};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use response_quality::config::LimitsConfig;
use response_quality::context::AnalysisContext;
use response_quality::error::QualityError;
use response_quality::platform::Platform;
use response_quality::{validate_input, PlatformReport, QualityReport};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub response: Option<String>,
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_context")]
    pub context: Option<AnalysisContext>,
    pub platform: Option<String>,
}

/// Accepts any JSON for `context`; values other than an object become an empty context.
fn lenient_context<'de, D>(deserializer: D) -> Result<Option<AnalysisContext>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(AnalysisContext::from_value))
}

/// A validated request, ready for the engine.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub text: String,
    pub content_type: String,
    pub context: AnalysisContext,
    pub platform: Option<Platform>,
}

impl AnalyzeRequest {
    pub fn into_input(self, limits: &LimitsConfig) -> Result<AnalysisInput, QualityError> {
        let text = self.response.unwrap_or_default();
        validate_input(&text, limits)?;

        let context = self.context.unwrap_or_default();
        let platform_name = self
            .platform
            .filter(|name| !name.trim().is_empty())
            .or_else(|| context.platform().map(str::to_string));
        let platform = match platform_name {
            Some(name) => {
                let platform = Platform::from_name(&name);
                if platform.is_none() {
                    tracing::warn!(platform = %name, "unknown platform, using base analysis");
                }
                platform
            }
            None => None,
        };

        Ok(AnalysisInput {
            text,
            content_type: self
                .content_type
                .unwrap_or_else(|| "general".to_string()),
            context,
            platform,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QualityAnalysis {
    Platform(Box<PlatformReport>),
    Base(QualityReport),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub quality_analysis: QualityAnalysis,
    pub analyzer: &'static str,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u128,
}

impl AnalyzeResponse {
    pub fn from_analysis(quality_analysis: QualityAnalysis, timestamp: u128) -> Self {
        Self {
            success: true,
            quality_analysis,
            analyzer: "heuristic",
            timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    pub code: &'static str,
}

pub type ApiFailure = (StatusCode, Json<ApiError>);

pub fn error_response(err: &QualityError) -> ApiFailure {
    let status = match err {
        QualityError::EmptyInput | QualityError::InputTooLong { .. } => StatusCode::BAD_REQUEST,
        QualityError::UnknownPlatform(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ApiError {
            success: false,
            error: err.to_string(),
            code: err.code(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> AnalyzeRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn blank_response_is_rejected() {
        let err = request(r#"{"response": "   "}"#)
            .into_input(&LimitsConfig::default())
            .unwrap_err();
        assert!(matches!(err, QualityError::EmptyInput));
        let (status, body) = error_response(&err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "Response text is required");
        assert!(!body.0.success);
    }

    #[test]
    fn oversized_response_is_rejected() {
        let limits = LimitsConfig { max_input_chars: 10 };
        let err = request(r#"{"response": "this is longer than ten"}"#)
            .into_input(&limits)
            .unwrap_err();
        assert_eq!(error_response(&err).0, StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "INPUT_TOO_LONG");
    }

    #[test]
    fn platform_falls_back_to_context() {
        let input = request(
            r#"{"response": "Hi", "context": {"platform": "Instagram", "targetAudience": "foodie"}}"#,
        )
        .into_input(&LimitsConfig::default())
        .unwrap();
        assert_eq!(input.platform, Some(Platform::Instagram));
        assert_eq!(input.content_type, "general");
        assert_eq!(input.context.target_audience(), Some("foodie"));
    }

    #[test]
    fn malformed_context_is_treated_as_empty() {
        for body in [
            r#"{"response": "Hi there", "context": "family"}"#,
            r#"{"response": "Hi there", "context": ["family"]}"#,
            r#"{"response": "Hi there", "context": 42}"#,
            r#"{"response": "Hi there", "context": null}"#,
        ] {
            let input = request(body)
                .into_input(&LimitsConfig::default())
                .unwrap();
            assert!(input.context.is_empty(), "{}", body);
            assert_eq!(input.platform, None);
        }
    }

    #[test]
    fn unknown_platform_is_dropped() {
        let input = request(r#"{"response": "Hi", "platform": "myspace"}"#)
            .into_input(&LimitsConfig::default())
            .unwrap();
        assert_eq!(input.platform, None);
    }
}
