//! Review analysis handlers
//!
//! Endpoints for running a sentiment analysis and reading stored ones back.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::{AnalysisId, StoredAnalysis};
use crate::domain::ports::{AnalysisRepository, ReviewSource, SentimentClassifier};
use crate::error::AppError;
use crate::AppState;

/// Request body for an analysis
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// App name ("Spotify") or package identifier ("com.spotify.music")
    pub app_name: String,
}

/// POST /api/reviews/analyze
///
/// Fetch the latest reviews for an app, classify them and return the report.
/// The report is stored before replying so it can be read back by ID.
pub async fn analyze_reviews<C, S, R>(
    State(state): State<AppState<C, S, R>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<StoredAnalysis>, AppError>
where
    C: SentimentClassifier + 'static,
    S: ReviewSource + 'static,
    R: AnalysisRepository + 'static,
{
    tracing::info!(app = %request.app_name, "Analyzing app reviews");

    let stored = state
        .analysis_service
        .analyze_and_store(&request.app_name)
        .await?;

    Ok(Json(stored))
}

/// GET /api/analyses/:id
pub async fn get_analysis<C, S, R>(
    State(state): State<AppState<C, S, R>>,
    Path(id): Path<String>,
) -> Result<Json<StoredAnalysis>, AppError>
where
    C: SentimentClassifier + 'static,
    S: ReviewSource + 'static,
    R: AnalysisRepository + 'static,
{
    let id = Uuid::parse_str(&id)
        .map(AnalysisId::from)
        .map_err(|_| AppError::BadRequest(format!("Invalid analysis ID: {}", id)))?;

    let stored = state.analysis_service.get_analysis(&id).await?;
    Ok(Json(stored))
}
