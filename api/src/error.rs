//! Unified error types for the review sentiment API
//!
//! This module defines error types for each layer:
//! - `ClassificationError`: per-review classifier failures (always absorbed by the fan-out)
//! - `ReviewSourceError`: review source failures (always abort the batch)
//! - `StoreError`: analysis repository failures
//! - `AppError`: Application layer errors (mapped to HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Sentiment classifier errors
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("Classifier unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Invalid classifier response: {reason}")]
    InvalidResponse { reason: String, raw: String },
}

impl From<reqwest::Error> for ClassificationError {
    fn from(e: reqwest::Error) -> Self {
        ClassificationError::ServiceUnavailable(e.to_string())
    }
}

/// Review source errors
#[derive(Debug, Error)]
pub enum ReviewSourceError {
    #[error("No app found matching: {0}")]
    NotFound(String),

    #[error("Review source unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for ReviewSourceError {
    fn from(e: reqwest::Error) -> Self {
        ReviewSourceError::Unavailable(e.to_string())
    }
}

/// Analysis repository errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Analysis store is closed")]
    Closed,

    #[error("Store error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Review source error: {0}")]
    ReviewSource(#[from] ReviewSourceError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::ReviewSource(ReviewSourceError::NotFound(msg)) => (
                StatusCode::BAD_REQUEST,
                "App not found",
                Some(format!("No app found with name: {}", msg)),
            ),
            AppError::ReviewSource(e @ ReviewSourceError::Unavailable(_)) => {
                tracing::error!("Review source error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "An unexpected error occurred while analyzing app reviews",
                    None,
                )
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.parts();

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_app_is_a_client_fault() {
        let err = AppError::from(ReviewSourceError::NotFound("nope".to_string()));
        let (status, _, details) = err.parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(details.unwrap().contains("nope"));
    }

    #[test]
    fn upstream_failure_hides_details() {
        let err = AppError::from(ReviewSourceError::Unavailable(
            "connection refused at 10.0.0.3".to_string(),
        ));
        let (status, _, details) = err.parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(details.is_none());
    }

    #[test]
    fn store_failure_is_server_fault() {
        let (status, _, _) = AppError::from(StoreError::Closed).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
