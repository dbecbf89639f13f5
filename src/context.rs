use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Caller-supplied context for the relevance metric.
///
/// Recognized keys are `targetAudience`, `platform` and `engagementGoal`. Every value, recognized
/// or not, feeds the keyword-overlap signal; unknown keys have no other effect. Values that are
/// not text (objects, null) contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisContext {
    values: BTreeMap<String, Value>,
}

impl AnalysisContext {
    pub const TARGET_AUDIENCE: &'static str = "targetAudience";
    pub const PLATFORM: &'static str = "platform";
    pub const ENGAGEMENT_GOAL: &'static str = "engagementGoal";

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from an arbitrary JSON value. Anything other than an object is empty.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self {
                values: map.into_iter().collect(),
            },
            _ => Self::default(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn with_target_audience(self, audience: impl Into<String>) -> Self {
        self.with(Self::TARGET_AUDIENCE, audience.into())
    }

    pub fn with_platform(self, platform: impl Into<String>) -> Self {
        self.with(Self::PLATFORM, platform.into())
    }

    pub fn with_engagement_goal(self, goal: impl Into<String>) -> Self {
        self.with(Self::ENGAGEMENT_GOAL, goal.into())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn target_audience(&self) -> Option<&str> {
        self.get_str(Self::TARGET_AUDIENCE)
    }

    pub fn platform(&self) -> Option<&str> {
        self.get_str(Self::PLATFORM)
    }

    pub fn engagement_goal(&self) -> Option<&str> {
        self.get_str(Self::ENGAGEMENT_GOAL)
    }

    /// Lowercased words longer than three characters drawn from every value.
    pub fn keywords(&self) -> Vec<String> {
        let mut fragments = Vec::new();
        for value in self.values.values() {
            collect_text(value, &mut fragments);
        }
        fragments
            .iter()
            .flat_map(|fragment| fragment.split_whitespace())
            .map(str::to_lowercase)
            .filter(|word| word.chars().count() > 3)
            .collect()
    }
}

fn collect_text(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(text) => out.push(text.clone()),
        Value::Number(number) => out.push(number.to_string()),
        Value::Bool(flag) => out.push(flag.to_string()),
        Value::Array(items) => {
            for item in items {
                collect_text(item, out);
            }
        }
        Value::Object(_) | Value::Null => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_object_values_build_an_empty_context() {
        assert!(AnalysisContext::from_value(serde_json::json!("family")).is_empty());
        assert!(AnalysisContext::from_value(serde_json::json!(["family"])).is_empty());
        assert!(AnalysisContext::from_value(Value::Null).is_empty());

        let context =
            AnalysisContext::from_value(serde_json::json!({ "targetAudience": "family" }));
        assert_eq!(context.target_audience(), Some("family"));
    }

    #[test]
    fn keywords_skip_short_words_and_objects() {
        let context = AnalysisContext::new()
            .with_target_audience("Busy Parents")
            .with("tags", serde_json::json!(["weekend", "fun"]))
            .with("nested", serde_json::json!({ "ignored": "value" }))
            .with("budget", 1500);

        let keywords = context.keywords();
        assert!(keywords.contains(&"busy".to_string()));
        assert!(keywords.contains(&"parents".to_string()));
        assert!(keywords.contains(&"weekend".to_string()));
        assert!(keywords.contains(&"1500".to_string()));
        assert!(!keywords.contains(&"fun".to_string()));
        assert!(!keywords.iter().any(|word| word == "value"));
    }

    #[test]
    fn non_text_recognized_keys_read_as_absent() {
        let context: AnalysisContext =
            serde_json::from_str(r#"{"targetAudience": 42, "platform": "Facebook"}"#).unwrap();
        assert_eq!(context.target_audience(), None);
        assert_eq!(context.platform(), Some("Facebook"));
        assert!(!context.is_empty());
    }
}
