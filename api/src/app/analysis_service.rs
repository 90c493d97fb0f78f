//! Analysis service
//!
//! Orchestrates one analysis: fetch reviews, classify them through the bounded
//! fan-out, reduce the outcomes, and hand the report to the analysis store.

use std::sync::Arc;

use crate::app::fan_out::FanOutExecutor;
use crate::app::sentiment_reducer;
use crate::domain::entities::{
    AnalysisId, AnalysisReport, AnnotatedReview, Review, StoredAnalysis, SAMPLE_SIZE,
};
use crate::domain::ports::{AnalysisRepository, ReviewSource, SentimentClassifier};
use crate::error::AppError;

/// Service for analyzing app review sentiment
pub struct AnalysisService<C, S, R>
where
    C: SentimentClassifier,
    S: ReviewSource,
    R: AnalysisRepository,
{
    reviews: Arc<S>,
    executor: FanOutExecutor<C>,
    analyses: Arc<R>,
}

impl<C, S, R> AnalysisService<C, S, R>
where
    C: SentimentClassifier,
    S: ReviewSource,
    R: AnalysisRepository,
{
    pub fn new(classifier: Arc<C>, reviews: Arc<S>, analyses: Arc<R>, concurrency: usize) -> Self {
        Self {
            reviews,
            executor: FanOutExecutor::new(classifier, concurrency),
            analyses,
        }
    }

    /// Maximum classifier calls in flight per analysis
    pub fn concurrency(&self) -> usize {
        self.executor.concurrency()
    }

    /// Analyze an app and return the stored analysis.
    ///
    /// Blocks on the analysis store so the result can be read back by ID; a
    /// store failure fails the request.
    pub async fn analyze_and_store(
        &self,
        app_identifier: &str,
    ) -> Result<StoredAnalysis, AppError> {
        let report = self.analyze(app_identifier).await?;
        let stored = self.analyses.store(report).await?;

        tracing::info!(analysis_id = %stored.id, "Stored analysis");
        Ok(stored)
    }

    /// Get a previously stored analysis
    pub async fn get_analysis(&self, id: &AnalysisId) -> Result<StoredAnalysis, AppError> {
        self.analyses
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Analysis {} not found", id)))
    }

    /// Analyze an app and return its report without touching the store.
    pub async fn analyze(&self, app_identifier: &str) -> Result<AnalysisReport, AppError> {
        let app_identifier = app_identifier.trim();
        if app_identifier.is_empty() {
            return Err(AppError::BadRequest(
                "App name or package identifier is required".to_string(),
            ));
        }

        let (app_info, reviews) = self.reviews.fetch_reviews(app_identifier).await?;
        let fetched = reviews.len();

        let reviews: Vec<Review> = reviews.into_iter().filter(Review::has_text).collect();
        tracing::info!(
            app = %app_info.package_name,
            fetched,
            with_text = reviews.len(),
            "Fetched reviews"
        );

        let outcomes = self.executor.classify_all(&reviews).await;
        let annotated: Vec<AnnotatedReview> = reviews
            .into_iter()
            .zip(outcomes)
            .map(|(review, outcome)| AnnotatedReview::new(review, outcome))
            .collect();

        let sentiment_data = sentiment_reducer::reduce(&annotated);
        tracing::info!(
            app = %app_info.package_name,
            review_count = sentiment_data.review_count,
            average = sentiment_data.average_intensity,
            positive = sentiment_data.positive_percentage,
            negative = sentiment_data.negative_percentage,
            neutral = sentiment_data.neutral_percentage,
            "Analysis complete"
        );

        let review_samples = annotated.into_iter().take(SAMPLE_SIZE).collect();

        Ok(AnalysisReport {
            app_info,
            sentiment_data,
            review_samples,
        })
    }
}
