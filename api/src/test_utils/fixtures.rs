//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::app::sentiment_reducer;
use crate::domain::entities::{
    AnalysisReport, AnnotatedReview, AppMetadata, ClassificationOutcome, Review, SentimentLabel,
};

/// Create a test review with the given id and text
pub fn test_review(id: &str, content: &str) -> Review {
    Review {
        id: id.to_string(),
        user_name: "Test User".to_string(),
        user_image: Some("https://example.com/avatar.png".to_string()),
        content: content.to_string(),
        score: 4,
        thumbs_up_count: 3,
        review_created_version: Some("1.2.3".to_string()),
        at: Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap(),
        reply_content: None,
        reply_at: None,
    }
}

/// Create `n` reviews with ids `review-0..review-{n-1}` and distinct text
pub fn test_reviews(n: usize) -> Vec<Review> {
    (0..n)
        .map(|i| test_review(&format!("review-{}", i), &format!("review text {}", i)))
        .collect()
}

/// Create test app metadata
pub fn test_app() -> AppMetadata {
    AppMetadata {
        name: "Example App".to_string(),
        package_name: "com.example.app".to_string(),
        developer: "Example Inc.".to_string(),
        icon: "https://example.com/icon.png".to_string(),
        rating: "4.2".to_string(),
    }
}

/// Create an annotated review with a classified outcome
pub fn annotated(content: &str, label: SentimentLabel, intensity: u8) -> AnnotatedReview {
    AnnotatedReview::new(
        test_review("annotated", content),
        ClassificationOutcome::Classified { label, intensity },
    )
}

/// Create a small report over two annotated reviews
pub fn test_report() -> AnalysisReport {
    let samples = vec![
        annotated("love it", SentimentLabel::Positive, 85),
        annotated("crashes", SentimentLabel::Negative, 20),
    ];

    AnalysisReport {
        app_info: test_app(),
        sentiment_data: sentiment_reducer::reduce(&samples),
        review_samples: samples,
    }
}
