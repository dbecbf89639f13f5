use response_quality::config::{FeedbackConfig, ScoringConfig};
use response_quality::feedback::{strength_text, weakness_text};
use response_quality::context::AnalysisContext;
use response_quality::{analyze, analyze_with_config, Complexity, Metric, Sentiment};

fn words(count: usize) -> String {
    vec!["word"; count].join(" ")
}

#[test]
fn blank_input_yields_baselines() {
    let report = analyze("   ", "conversation", &AnalysisContext::new());

    assert_eq!(report.metrics.coherence, 0.0);
    assert_eq!(report.metrics.relevance, 0.5);
    assert_eq!(report.metrics.completeness, 0.0);
    assert_eq!(report.metrics.clarity, 0.0);
    assert_eq!(report.metrics.engagement, 0.0);
    assert_eq!(report.metrics.structure, 0.0);
    assert_eq!(report.metrics.tone, 0.0);
    assert_eq!(report.metrics.length, 0.0);
    assert_eq!(report.overall_score, 15);

    assert!(report.strengths.is_empty());
    assert_eq!(report.weaknesses.len(), 7);
    assert_eq!(report.suggestions.len(), 8);
    assert!(report.key_points.is_empty());
    assert_eq!(report.sentiment, Sentiment::Neutral);
    assert_eq!(report.complexity, Complexity::Moderate);
    assert!(!report.pattern_analysis.has_questions);
    assert_eq!(report.structure_analysis.words, 0);
}

#[test]
fn warm_call_to_action_is_engaging() {
    let report = analyze(
        "This is amazing! You will love it. Try it today.",
        "conversation",
        &AnalysisContext::new(),
    );
    assert!(report.metrics.engagement >= 0.7);
    assert_eq!(report.sentiment, Sentiment::Positive);
}

#[test]
fn question_mark_adds_exactly_two_tenths_of_engagement() {
    let context = AnalysisContext::new();
    let plain = analyze("The garden opens at nine", "conversation", &context);
    let asked = analyze("The garden opens at nine?", "conversation", &context);
    assert!((asked.metrics.engagement - plain.metrics.engagement - 0.2).abs() < 1e-9);
}

#[test]
fn unknown_content_type_matches_conversation() {
    let text = "Hello friends! Thanks for the details about the trip.";
    let context = AnalysisContext::new().with_target_audience("family");
    let conversation = analyze(text, "conversation", &context);
    assert_eq!(analyze(text, "facebook_post", &context), conversation);
    assert_eq!(analyze(text, "general", &context), conversation);
    assert_eq!(analyze(text, "", &context), conversation);
}

#[test]
fn connectors_raise_coherence() {
    let context = AnalysisContext::new();
    let connected = analyze(
        "We shipped early because the tests passed. Therefore the launch moved up.",
        "conversation",
        &context,
    );
    let plain = analyze(
        "We shipped early. The launch moved up.",
        "conversation",
        &context,
    );
    assert!(connected.metrics.coherence > plain.metrics.coherence);
}

#[test]
fn review_length_bands() {
    let context = AnalysisContext::new();
    assert_eq!(analyze(&words(250), "review", &context).metrics.length, 1.0);
    assert_eq!(analyze(&words(50), "review", &context).metrics.length, 0.3);
}

#[test]
fn hashtags_raise_relevance_by_a_tenth() {
    let context = AnalysisContext::new();
    let plain = analyze("Fresh bread every morning", "conversation", &context);
    let tagged = analyze("Fresh bread every morning #a #b #c", "conversation", &context);
    assert!((tagged.metrics.relevance - plain.metrics.relevance - 0.1).abs() < 1e-9);
}

#[test]
fn overall_score_weights_four_metrics() {
    let report = analyze(
        "Hi everyone! We baked something new today. Try the sourdough, you will love it.",
        "conversation",
        &AnalysisContext::new().with_platform("facebook"),
    );
    let m = &report.metrics;
    let expected =
        (100.0 * (0.40 * m.coherence + 0.30 * m.relevance + 0.15 * m.clarity + 0.15 * m.engagement))
            .round() as i64;
    assert!((i64::from(report.overall_score) - expected).abs() <= 1);
}

#[test]
fn strengths_and_weaknesses_follow_metric_order() {
    let feedback = FeedbackConfig::default();
    let texts = [
        words(120),
        "Hi everyone! We baked something new today. Try the sourdough, you will love it.".to_string(),
        "Thanks for reaching out. Unfortunately the order was delayed.\n\nWe will follow up soon."
            .to_string(),
    ];

    for text in &texts {
        let report = analyze(text, "conversation", &AnalysisContext::new());
        let expected_strengths: Vec<String> = Metric::ALL
            .into_iter()
            .filter(|metric| report.metrics.get(*metric) >= feedback.strength_threshold)
            .map(|metric| strength_text(metric).to_string())
            .collect();
        let expected_weaknesses: Vec<String> = Metric::ALL
            .into_iter()
            .filter(|metric| report.metrics.get(*metric) < feedback.weakness_threshold)
            .map(|metric| weakness_text(metric).to_string())
            .collect();
        assert_eq!(report.strengths, expected_strengths);
        assert_eq!(report.weaknesses, expected_weaknesses);
    }

    let long = analyze(&words(120), "conversation", &AnalysisContext::new());
    assert!(long
        .strengths
        .contains(&"Optimal length for the content type".to_string()));
    assert!(!long.weaknesses.is_empty());
}

#[test]
fn capitalized_content_type_is_scored_as_conversation() {
    let text = "Great experience overall. The highlights were the details, and I recommend it.";
    let context = AnalysisContext::new();
    let conversation = analyze(text, "conversation", &context);
    let review = analyze(text, "review", &context);
    assert_eq!(analyze(text, "Review", &context), conversation);
    assert_eq!(analyze(text, "CUSTOMER-SERVICE", &context), conversation);
    assert_eq!(analyze(text, " analysis ", &context), conversation);
    assert_ne!(review, conversation);
}

#[test]
fn config_caps_suggestions_and_key_points() {
    let mut config = ScoringConfig::default();
    config.feedback.max_suggestions = 3;
    config.feedback.max_key_points = 1;

    let report = analyze_with_config(
        "One idea. Another idea. A third idea.",
        "analysis",
        &AnalysisContext::new(),
        &config,
    );
    assert_eq!(report.suggestions.len(), 3);
    assert_eq!(report.key_points, vec!["One idea"]);
}

#[test]
fn report_serializes_in_camel_case() {
    let report = analyze(
        "Key takeaway: our results improved. What do you think?",
        "customer-service",
        &AnalysisContext::new(),
    );
    let value = serde_json::to_value(&report).unwrap();

    assert!(value["overallScore"].is_u64());
    assert!(value["metrics"]["coherence"].is_f64());
    assert_eq!(value["contentType"], "customer_service");
    assert_eq!(value["patternAnalysis"]["hasQuestions"], true);
    assert!(value["structureAnalysis"]["avgSentenceLength"].is_number());
    assert!(value["keyPoints"].is_array());
    assert!(value["sentiment"].is_string());
    assert!(value["complexity"].is_string());
}

#[test]
fn identical_inputs_serialize_identically() {
    let text = "First, thanks for asking.\n\n- fast setup\n- clear docs\n\nFinally, try it!";
    let context = AnalysisContext::new().with_engagement_goal("signups");
    let first = serde_json::to_string(&analyze(text, "analysis", &context)).unwrap();
    let second = serde_json::to_string(&analyze(text, "analysis", &context)).unwrap();
    assert_eq!(first, second);
}
