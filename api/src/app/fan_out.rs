//! Bounded fan-out executor
//!
//! Runs one classifier call per review with at most `concurrency` calls in flight.
//! A finished call immediately admits the next queued one, so slow calls only
//! hold their own slot. Per-review failures are absorbed into
//! `ClassificationOutcome::Failed` and never abort the batch.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};

use crate::domain::entities::{ClassificationOutcome, Review};
use crate::domain::ports::SentimentClassifier;
use crate::error::ClassificationError;

/// Default cap on concurrent classifier calls
pub const DEFAULT_CONCURRENCY: usize = 5;

pub struct FanOutExecutor<C>
where
    C: SentimentClassifier,
{
    classifier: Arc<C>,
    concurrency: usize,
}

impl<C> FanOutExecutor<C>
where
    C: SentimentClassifier,
{
    /// A cap of zero is treated as one.
    pub fn new(classifier: Arc<C>, concurrency: usize) -> Self {
        Self {
            classifier,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Classify every review, returning one outcome per review in input order.
    ///
    /// Callers are expected to have dropped reviews without text already.
    pub async fn classify_all(&self, reviews: &[Review]) -> Vec<ClassificationOutcome> {
        tracing::info!(
            reviews = reviews.len(),
            concurrency = self.concurrency,
            "Classifying review batch"
        );

        // Every slot is overwritten: buffer_unordered yields each future exactly once.
        let mut outcomes = vec![ClassificationOutcome::Failed; reviews.len()];

        // Built eagerly: a lazy `map` over borrowed reviews is not provably `Send`.
        let calls: Vec<_> = reviews
            .iter()
            .enumerate()
            .map(|(idx, review)| async move { (idx, self.classify_one(review).await) })
            .collect();

        let mut completions = stream::iter(calls).buffer_unordered(self.concurrency);

        while let Some((idx, outcome)) = completions.next().await {
            outcomes[idx] = outcome;
        }

        let failed = outcomes.iter().filter(|o| o.is_failed()).count();
        if failed > 0 {
            tracing::warn!(
                failed,
                total = outcomes.len(),
                "Some reviews fell back to neutral"
            );
        }

        outcomes
    }

    async fn classify_one(&self, review: &Review) -> ClassificationOutcome {
        let started = Instant::now();
        tracing::debug!(review_id = %review.id, "Classifying review");

        match self.classifier.classify(&review.content).await {
            Ok(sentiment) => {
                tracing::debug!(
                    review_id = %review.id,
                    label = %sentiment.label,
                    intensity = sentiment.intensity,
                    confidence = sentiment.confidence,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Review classified"
                );
                sentiment.into()
            }
            Err(ClassificationError::InvalidResponse { reason, raw }) => {
                tracing::warn!(
                    review_id = %review.id,
                    reason = %reason,
                    raw = %raw,
                    "Classifier returned an invalid response, using fallback"
                );
                ClassificationOutcome::Failed
            }
            Err(e) => {
                tracing::warn!(
                    review_id = %review.id,
                    error = %e,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Failed to classify review, using fallback"
                );
                ClassificationOutcome::Failed
            }
        }
    }
}
