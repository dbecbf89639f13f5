use proptest::prelude::*;
use response_quality::config::ScoringConfig;
use response_quality::context::AnalysisContext;
use response_quality::platform::Platform;
use response_quality::{analyze, analyze_for_platform};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn scores_stay_in_bounds(ref text in "(?s).{0,400}") {
        let report = analyze(text, "conversation", &AnalysisContext::new());
        prop_assert!(report.overall_score <= 100);
        for (_, value) in report.metrics.iter() {
            prop_assert!((0.0..=1.0).contains(&value));
        }
        prop_assert!(report.suggestions.len() <= 8);
        prop_assert!(report.key_points.len() <= 5);
    }

    #[test]
    fn prose_like_text_stays_in_bounds(
        ref text in "([A-Za-z#@?!.,]{1,12}[ \n]{1,3}){0,80}",
        content_type in prop::sample::select(vec!["conversation", "analysis", "customer_service", "review"]),
    ) {
        let context = AnalysisContext::new()
            .with_target_audience("busy parents")
            .with_platform("instagram");
        let report = analyze(text, content_type, &context);
        prop_assert!(report.overall_score <= 100);
        for (_, value) in report.metrics.iter() {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn analysis_is_idempotent(ref text in "(?s).{0,300}") {
        let context = AnalysisContext::new().with_engagement_goal("comments");
        let first = serde_json::to_string(&analyze(text, "analysis", &context)).unwrap();
        let second = serde_json::to_string(&analyze(text, "analysis", &context)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_content_types_score_as_conversation(
        ref key in "[a-z]{1,12}",
        ref text in "[a-z ?.]{0,120}",
    ) {
        prop_assume!(!["analysis", "review", "conversation"].contains(&key.as_str()));
        let context = AnalysisContext::new();
        prop_assert_eq!(analyze(text, key, &context), analyze(text, "conversation", &context));
    }

    #[test]
    fn platform_scores_stay_in_bounds(
        ref text in "(?s).{0,300}",
        index in 0usize..6,
    ) {
        let report = analyze_for_platform(
            text,
            Platform::ALL[index],
            "general",
            &AnalysisContext::new(),
            &ScoringConfig::default(),
        );
        prop_assert!(report.platform_score <= 100);
        prop_assert!(report.platform_suggestions.len() <= 5);
        let metrics = &report.platform_metrics;
        for value in [
            metrics.hashtag_score,
            metrics.emoji_score,
            metrics.length_score,
            metrics.character_efficiency,
            metrics.engagement_score,
            metrics.tone_score,
            metrics.keyword_score,
        ] {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }
}
