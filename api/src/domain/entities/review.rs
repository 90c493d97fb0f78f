//! Review domain entity
//!
//! A single user review of a mobile app, plus the metadata of the app it belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An app-store review as handed to the sentiment pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    pub user_image: Option<String>,
    pub content: String,
    /// Star rating (1-5)
    pub score: u8,
    pub thumbs_up_count: u32,
    pub review_created_version: Option<String>,
    pub at: DateTime<Utc>,
    pub reply_content: Option<String>,
    pub reply_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Whether this review has any text worth classifying.
    /// Whitespace-only reviews are dropped before classification and never counted.
    pub fn has_text(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Metadata for the app whose reviews are analyzed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    pub name: String,
    pub package_name: String,
    pub developer: String,
    pub icon: String,
    /// Store rating, kept as the source formats it (e.g. "4.3")
    pub rating: String,
}
