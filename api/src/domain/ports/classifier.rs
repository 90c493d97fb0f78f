//! Sentiment classifier port trait
//!
//! Defines the interface for the external text-classification capability.

use async_trait::async_trait;

use crate::domain::entities::ClassifiedSentiment;
use crate::error::ClassificationError;

/// Port trait for classifying the sentiment of a single text
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify one non-empty text. No retries are attempted.
    async fn classify(&self, text: &str) -> Result<ClassifiedSentiment, ClassificationError>;
}
