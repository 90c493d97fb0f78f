//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record what they were asked to do so tests can verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::domain::entities::{AppMetadata, ClassifiedSentiment, Review, SentimentLabel};
use crate::domain::ports::{ReviewSource, SentimentClassifier};
use crate::error::{ClassificationError, ReviewSourceError};

// ============================================================================
// Scripted Classifier
// ============================================================================

#[derive(Debug, Clone)]
enum Scripted {
    Respond(ClassifiedSentiment),
    Unavailable,
    Invalid,
}

/// Classifier that answers from a script keyed by review text.
///
/// Unscripted texts classify as positive/75.
#[derive(Default)]
pub struct ScriptedClassifier {
    script: HashMap<String, Scripted>,
    delays: HashMap<String, Duration>,
    fail_all: bool,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A classifier whose every call fails as unavailable
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, text: &str, label: SentimentLabel, intensity: u8) -> Self {
        self.script.insert(
            text.to_string(),
            Scripted::Respond(ClassifiedSentiment {
                label,
                intensity,
                confidence: 0.9,
            }),
        );
        self
    }

    pub fn with_delay(mut self, text: &str, delay: Duration) -> Self {
        self.delays.insert(text.to_string(), delay);
        self
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.script.insert(text.to_string(), Scripted::Unavailable);
        self
    }

    pub fn invalid_on(mut self, text: &str) -> Self {
        self.script.insert(text.to_string(), Scripted::Invalid);
        self
    }
}

#[async_trait]
impl SentimentClassifier for ScriptedClassifier {
    async fn classify(&self, text: &str) -> Result<ClassifiedSentiment, ClassificationError> {
        if let Some(delay) = self.delays.get(text) {
            tokio::time::sleep(*delay).await;
        }

        if self.fail_all {
            return Err(ClassificationError::ServiceUnavailable(
                "mock classifier down".to_string(),
            ));
        }

        match self.script.get(text) {
            Some(Scripted::Respond(sentiment)) => Ok(*sentiment),
            Some(Scripted::Unavailable) => Err(ClassificationError::ServiceUnavailable(
                "mock classifier down".to_string(),
            )),
            Some(Scripted::Invalid) => Err(ClassificationError::InvalidResponse {
                reason: "not valid JSON".to_string(),
                raw: "Sure! Here is the sentiment".to_string(),
            }),
            None => Ok(ClassifiedSentiment {
                label: SentimentLabel::Positive,
                intensity: 75,
                confidence: 0.9,
            }),
        }
    }
}

// ============================================================================
// Delayed Classifier
// ============================================================================

/// Classifier that sleeps on every call and tracks how many calls overlap
pub struct DelayedClassifier {
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl DelayedClassifier {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of calls observed in flight at once
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentClassifier for DelayedClassifier {
    async fn classify(&self, _text: &str) -> Result<ClassifiedSentiment, ClassificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(ClassifiedSentiment {
            label: SentimentLabel::Neutral,
            intensity: 50,
            confidence: 0.5,
        })
    }
}

// ============================================================================
// Mock Review Source
// ============================================================================

/// Review source serving canned apps, matched by package name or app name
#[derive(Default)]
pub struct MockReviewSource {
    apps: Vec<(AppMetadata, Vec<Review>)>,
    should_fail: bool,
}

impl MockReviewSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A review source whose every call fails as unavailable
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_app(mut self, app: AppMetadata, reviews: Vec<Review>) -> Self {
        self.apps.push((app, reviews));
        self
    }
}

#[async_trait]
impl ReviewSource for MockReviewSource {
    async fn fetch_reviews(
        &self,
        app_identifier: &str,
    ) -> Result<(AppMetadata, Vec<Review>), ReviewSourceError> {
        if self.should_fail {
            return Err(ReviewSourceError::Unavailable(
                "mock review source down".to_string(),
            ));
        }

        self.apps
            .iter()
            .find(|(app, _)| {
                app.package_name == app_identifier || app.name.eq_ignore_ascii_case(app_identifier)
            })
            .cloned()
            .ok_or_else(|| ReviewSourceError::NotFound(app_identifier.to_string()))
    }
}
