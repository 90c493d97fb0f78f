//! Domain entities
//!
//! Pure domain models for reviews, sentiment and analysis reports.

pub mod analysis;
pub mod review;
pub mod sentiment;

pub use analysis::{AggregateSentiment, AnalysisId, AnalysisReport, StoredAnalysis, SAMPLE_SIZE};
pub use review::{AppMetadata, Review};
pub use sentiment::{
    AnnotatedReview, ClassificationOutcome, ClassifiedSentiment, SentimentLabel,
    FALLBACK_INTENSITY,
};
