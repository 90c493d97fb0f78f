//! Review Sentiment API Server
//!
//! Fetches the latest store reviews for a mobile app, classifies each review's
//! sentiment through an external classifier with bounded concurrency, and
//! reports aggregate sentiment for the batch.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryAnalysisRepository, OpenAiClassifier, PlayStoreClient};
use app::AnalysisService;
use config::Config;
use domain::ports::{AnalysisRepository, ReviewSource, SentimentClassifier};

/// Application state shared across all handlers
pub struct AppState<C, S, R>
where
    C: SentimentClassifier,
    S: ReviewSource,
    R: AnalysisRepository,
{
    pub analysis_service: Arc<AnalysisService<C, S, R>>,
}

impl<C, S, R> Clone for AppState<C, S, R>
where
    C: SentimentClassifier,
    S: ReviewSource,
    R: AnalysisRepository,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: self.analysis_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// API routes, without rate limiting or transport middleware
pub fn api_router<C, S, R>(state: AppState<C, S, R>) -> Router
where
    C: SentimentClassifier + 'static,
    S: ReviewSource + 'static,
    R: AnalysisRepository + 'static,
{
    Router::new()
        .route(
            "/api/reviews/analyze",
            post(handlers::analyze_reviews::<C, S, R>),
        )
        .route("/api/analyses/:id", get(handlers::get_analysis::<C, S, R>))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,review_sentiment_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting review sentiment API...");

    // Load configuration
    let config = Config::from_env();
    if !config.classifier_configured() {
        tracing::warn!("OPENAI_API_KEY is not set; every review will fall back to neutral");
    }

    // Create adapters
    let classifier = Arc::new(
        OpenAiClassifier::new(
            config.openai_base_url.clone(),
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            std::time::Duration::from_secs(config.classifier_timeout_secs),
        )
        .context("Failed to build classifier HTTP client")?,
    );
    let review_source = Arc::new(PlayStoreClient::new(
        config.review_source_url.clone(),
        config.review_batch_size,
    ));
    let analyses = Arc::new(InMemoryAnalysisRepository::new());
    analyses
        .open()
        .await
        .context("Failed to open analysis store")?;

    // Create application services
    let analysis_service = Arc::new(AnalysisService::new(
        classifier,
        review_source,
        analyses.clone(),
        config.classify_concurrency,
    ));
    tracing::info!(
        concurrency = analysis_service.concurrency(),
        batch_size = config.review_batch_size,
        model = %config.openai_model,
        "Analysis service ready"
    );

    let state = AppState { analysis_service };

    // Every analysis fans out to a paid classifier: one request replenished
    // every 2 seconds per client IP, burst of 5
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    let cors = match &config.cors_allowed_origin {
        Some(origin) => CorsLayer::new().allow_origin(
            origin
                .parse::<HeaderValue>()
                .context("CORS_ALLOWED_ORIGIN is not a valid header value")?,
        ),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods(Any)
    .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check (no rate limit)
        .route("/health", get(health))
        .merge(api_router(state).layer(GovernorLayer {
            config: governor_config,
        }))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    analyses
        .close()
        .await
        .context("Failed to close analysis store")?;
    tracing::info!("Stopped");

    Ok(())
}
