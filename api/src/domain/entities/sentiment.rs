//! Sentiment domain entities
//!
//! Labels, classifier results and the per-review outcome of a classification attempt.

use serde::{Deserialize, Serialize};

use super::Review;

/// Intensity substituted when a review could not be classified
pub const FALLBACK_INTENSITY: u8 = 50;

/// Sentiment label assigned to a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            _ => Err(format!("Unknown sentiment label: {}", s)),
        }
    }
}

/// A successful classifier result, already normalized
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedSentiment {
    pub label: SentimentLabel,
    /// 0-100
    pub intensity: u8,
    /// 0.0-1.0, kept for observability only
    pub confidence: f64,
}

/// Result of attempting to classify one review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationOutcome {
    Classified { label: SentimentLabel, intensity: u8 },
    Failed,
}

impl ClassificationOutcome {
    pub fn label(&self) -> SentimentLabel {
        match self {
            ClassificationOutcome::Classified { label, .. } => *label,
            ClassificationOutcome::Failed => SentimentLabel::Neutral,
        }
    }

    pub fn intensity(&self) -> u8 {
        match self {
            ClassificationOutcome::Classified { intensity, .. } => *intensity,
            ClassificationOutcome::Failed => FALLBACK_INTENSITY,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ClassificationOutcome::Failed)
    }
}

impl From<ClassifiedSentiment> for ClassificationOutcome {
    fn from(s: ClassifiedSentiment) -> Self {
        ClassificationOutcome::Classified {
            label: s.label,
            intensity: s.intensity,
        }
    }
}

/// A review joined with its sentiment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentLabel,
    pub sentiment_score: u8,
}

impl AnnotatedReview {
    pub fn new(review: Review, outcome: ClassificationOutcome) -> Self {
        Self {
            review,
            sentiment: outcome.label(),
            sentiment_score: outcome.intensity(),
        }
    }
}
