//! Review source port trait
//!
//! Defines the interface for fetching an app's metadata and its latest reviews.

use async_trait::async_trait;

use crate::domain::entities::{AppMetadata, Review};
use crate::error::ReviewSourceError;

/// Port trait for review retrieval
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Resolve an app name or package identifier and fetch one batch of its reviews.
    ///
    /// Reviews come back in source order (newest first). Fails with
    /// `ReviewSourceError::NotFound` when no app matches.
    async fn fetch_reviews(
        &self,
        app_identifier: &str,
    ) -> Result<(AppMetadata, Vec<Review>), ReviewSourceError>;
}
