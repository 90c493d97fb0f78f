//! Analysis domain entities
//!
//! Aggregate sentiment for a batch, the report built from it, and the stored form
//! of that report.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use super::{AnnotatedReview, AppMetadata};

/// Number of annotated reviews kept in a report
pub const SAMPLE_SIZE: usize = 10;

/// Unique identifier for a stored analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AnalysisId(pub Uuid);

impl AnalysisId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AnalysisId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary statistics for one batch of annotated reviews
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSentiment {
    #[serde(rename = "averageScore")]
    pub average_intensity: u8,
    pub review_count: usize,
    #[serde(rename = "date", serialize_with = "serialize_report_date")]
    pub generated_on: NaiveDate,
    pub positive_percentage: u8,
    pub negative_percentage: u8,
    pub neutral_percentage: u8,
}

/// Renders dates the way the report UI shows them, e.g. "Oct 19, 2026"
fn serialize_report_date<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&date.format("%b %d, %Y"))
}

/// The externally visible result of analyzing one app
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub app_info: AppMetadata,
    pub sentiment_data: AggregateSentiment,
    pub review_samples: Vec<AnnotatedReview>,
}

/// An analysis report after it has been handed to the store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    pub id: AnalysisId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: AnalysisReport,
}
