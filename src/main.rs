mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use response_quality::config::ScoringConfig;
use response_quality::context::AnalysisContext;
use response_quality::error::QualityError;
use response_quality::platform::{recommendations, Platform};
use response_quality::{
    analyze_for_platform, analyze_with_config, format_float, format_percent, validate_input,
    PlatformReport, QualityReport,
};

#[derive(Parser)]
#[command(name = "response-quality", about = "Heuristic response quality analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Score a response (default)
    Analyze(AnalyzeArgs),
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Print publishing guidance for a platform
    Recommend(RecommendArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct AnalyzeArgs {
    /// Response text; read from stdin when omitted
    #[arg(long)]
    text: Option<String>,
    #[arg(long, default_value = "general")]
    content_type: String,
    #[arg(long)]
    platform: Option<String>,
    #[arg(long)]
    audience: Option<String>,
    #[arg(long)]
    goal: Option<String>,
    /// Extra context as key=value, repeatable
    #[arg(long = "context", value_parser = parse_key_value)]
    context: Vec<(String, String)>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    details: bool,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    /// Directory of static files served for non-API paths
    #[arg(long)]
    web_root: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct RecommendArgs {
    platform: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Analyze(AnalyzeArgs::default_for_stdin()));

    match command {
        Command::Analyze(args) => run_analyze(args),
        Command::Serve(args) => {
            let config = load_config(args.config.clone())?;
            server::serve(args, config).await
        }
        Command::Recommend(args) => run_recommend(&args.platform),
    }
}

impl AnalyzeArgs {
    fn default_for_stdin() -> Self {
        Self {
            content_type: "general".to_string(),
            ..Self::default()
        }
    }

    fn context(&self) -> AnalysisContext {
        let mut context = AnalysisContext::new();
        for (key, value) in &self.context {
            context.insert(key.clone(), value.clone());
        }
        if let Some(audience) = &self.audience {
            context.insert(AnalysisContext::TARGET_AUDIENCE, audience.clone());
        }
        if let Some(goal) = &self.goal {
            context.insert(AnalysisContext::ENGAGEMENT_GOAL, goal.clone());
        }
        if let Some(platform) = &self.platform {
            context.insert(AnalysisContext::PLATFORM, platform.clone());
        }
        context
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), String> {
    let config = load_config(args.config.clone())?;
    let text = read_text(args.text.clone())?;
    validate_input(&text, &config.limits).map_err(|err| err.to_string())?;

    let context = args.context();
    let platform = match args.platform.as_deref() {
        Some(name) => {
            let platform = Platform::from_name(name);
            if platform.is_none() {
                tracing::warn!(platform = %name, "unknown platform, using base analysis");
            }
            platform
        }
        None => None,
    };

    match platform {
        Some(platform) => {
            let report =
                analyze_for_platform(&text, platform, &args.content_type, &context, &config);
            if args.json {
                print_json(&report)
            } else {
                print_report(&report.quality, args.details);
                print_platform(&report);
                Ok(())
            }
        }
        None => {
            let report = analyze_with_config(&text, &args.content_type, &context, &config);
            if args.json {
                print_json(&report)
            } else {
                print_report(&report, args.details);
                Ok(())
            }
        }
    }
}

fn run_recommend(name: &str) -> Result<(), String> {
    let platform = Platform::from_name(name)
        .ok_or_else(|| QualityError::UnknownPlatform(name.to_string()).to_string())?;
    print_json(&recommendations(platform))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to encode report: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn print_report(report: &QualityReport, details: bool) {
    println!(
        "Overall score: {}/100 ({})",
        report.overall_score,
        report.content_type.key()
    );
    println!(
        "Metrics: {}",
        report
            .metrics
            .iter()
            .map(|(metric, value)| format!("{} {}", metric.label(), format_float(value, 2)))
            .collect::<Vec<_>>()
            .join(" | ")
    );
    println!(
        "Sentiment: {} | complexity: {}",
        report.sentiment.label(),
        report.complexity.label()
    );

    print_list("Strengths", &report.strengths);
    print_list("Weaknesses", &report.weaknesses);
    print_list("Suggestions", &report.suggestions);

    if details {
        let structure = &report.structure_analysis;
        println!("\nStructure:");
        println!(
            "  paragraphs {} | sentences {} | words {}",
            structure.paragraphs, structure.sentences, structure.words
        );
        println!(
            "  words per sentence {} | sentences per paragraph {}",
            format_float(structure.avg_sentence_length, 1),
            format_float(structure.avg_paragraph_length, 1)
        );
        println!(
            "  introduction {} | body {} | conclusion {}",
            structure.has_introduction, structure.has_body, structure.has_conclusion
        );

        let patterns = &report.pattern_analysis;
        println!("\nPatterns:");
        println!(
            "  questions {} | pronouns {} | emotional words {} | call to action {}",
            patterns.has_questions,
            patterns.has_personal_pronouns,
            patterns.has_emotional_words,
            patterns.has_call_to_action
        );
        println!(
            "  transitions {} | bullets {} | numbered list {} | paragraphs {}",
            patterns.has_transitions,
            patterns.has_bullet_points,
            patterns.has_numbered_list,
            patterns.has_paragraphs
        );

        print_list("Key points", &report.key_points);
    }
}

fn print_platform(report: &PlatformReport) {
    let metrics = &report.platform_metrics;
    println!(
        "\n{} score: {}/100",
        report.platform, report.platform_score
    );
    println!(
        "  hashtags {} ({}) | emojis {} ({}) | length {} | engagement {}",
        metrics.hashtag_count,
        format_percent(metrics.hashtag_score),
        metrics.emoji_count,
        format_percent(metrics.emoji_score),
        format_percent(metrics.length_score),
        format_percent(metrics.engagement_score)
    );
    print_list("Platform suggestions", &report.platform_suggestions);
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}:", title);
    for item in items {
        println!("- {}", item);
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty context key in `{}`", raw));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn load_config(path: Option<PathBuf>) -> Result<ScoringConfig, String> {
    let (config, config_path) = ScoringConfig::load(path).map_err(|err| err.to_string())?;
    match config_path {
        Some(path) if path.exists() => {
            tracing::info!(path = %path.display(), "loaded scoring config")
        }
        _ => tracing::info!("using default scoring config"),
    }
    Ok(config)
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing response text: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_pairs_parse() {
        assert_eq!(
            parse_key_value("topic = garden care").unwrap(),
            ("topic".to_string(), "garden care".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn flags_build_context() {
        let args = AnalyzeArgs {
            audience: Some("parents".to_string()),
            platform: Some("facebook".to_string()),
            context: vec![("topic".to_string(), "camping".to_string())],
            ..AnalyzeArgs::default_for_stdin()
        };
        let context = args.context();
        assert_eq!(context.target_audience(), Some("parents"));
        assert_eq!(context.platform(), Some("facebook"));
        assert_eq!(context.get_str("topic"), Some("camping"));
        assert_eq!(context.engagement_goal(), None);
    }
}
