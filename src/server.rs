use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{
    net::SocketAddr,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{error_response, AnalyzeRequest, AnalyzeResponse, ApiFailure, QualityAnalysis};
use response_quality::config::ScoringConfig;
use response_quality::error::QualityError;
use response_quality::platform::{recommendations, Platform, Recommendations};
use response_quality::profiles::{ContentProfile, ContentType};
use response_quality::{analyze_for_platform, analyze_with_config};

#[derive(Clone)]
struct AppState {
    config: Arc<ScoringConfig>,
}

pub async fn serve(args: crate::ServeArgs, config: ScoringConfig) -> Result<(), String> {
    let state = AppState {
        config: Arc::new(config),
    };

    let mut app = router(state);
    if let Some(web_root) = args.web_root {
        let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
        let static_service =
            ServeDir::new(&web_root).not_found_service(ServeFile::new(index_path));
        tracing::info!(web_root = %web_root, "serving static files");
        app = app.fallback_service(static_service);
    }

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    tracing::info!(%addr, "quality analyzer listening");

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze-response-quality", post(analyze_handler))
        .route("/api/platforms/:platform", get(platform_handler))
        .route("/api/content-types", get(content_types_handler))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiFailure> {
    let input = request.into_input(&state.config.limits).map_err(|err| {
        tracing::warn!(error = %err, "rejected analysis request");
        error_response(&err)
    })?;

    let analysis = match input.platform {
        Some(platform) => QualityAnalysis::Platform(Box::new(analyze_for_platform(
            &input.text,
            platform,
            &input.content_type,
            &input.context,
            &state.config,
        ))),
        None => QualityAnalysis::Base(analyze_with_config(
            &input.text,
            &input.content_type,
            &input.context,
            &state.config,
        )),
    };
    tracing::debug!(
        content_type = %input.content_type,
        platform = input.platform.map(Platform::key).unwrap_or("none"),
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse::from_analysis(analysis, now_ms())))
}

async fn platform_handler(Path(platform): Path<String>) -> Result<Json<Recommendations>, ApiFailure> {
    Platform::from_name(&platform)
        .map(|platform| Json(recommendations(platform)))
        .ok_or_else(|| error_response(&QualityError::UnknownPlatform(platform)))
}

async fn content_types_handler() -> Json<Vec<&'static ContentProfile>> {
    Json(
        ContentType::ALL
            .iter()
            .map(|content_type| content_type.profile())
            .collect(),
    )
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
