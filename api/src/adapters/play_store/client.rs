//! Play Store review source client
//!
//! Talks to a Play Store scraper service over HTTP. Identifiers without a `.`
//! are treated as app names and resolved through the search endpoint first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use urlencoding::encode;

use crate::domain::entities::{AppMetadata, Review};
use crate::domain::ports::ReviewSource;
use crate::error::ReviewSourceError;

/// Implementation of the review source over a Play Store scraper service
pub struct PlayStoreClient {
    http: Client,
    base_url: String,
    batch_size: usize,
}

impl PlayStoreClient {
    pub fn new(base_url: String, batch_size: usize) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            batch_size,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        not_found: &str,
    ) -> Result<T, ReviewSourceError> {
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ReviewSourceError::Unavailable(format!("bad payload: {}", e)))
        } else if status == StatusCode::NOT_FOUND {
            Err(ReviewSourceError::NotFound(not_found.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ReviewSourceError::Unavailable(format!(
                "{} - {}",
                status.as_u16(),
                message
            )))
        }
    }

    /// Resolve an app name to its package identifier via search
    async fn resolve_app_id(&self, app_identifier: &str) -> Result<String, ReviewSourceError> {
        if looks_like_package_id(app_identifier) {
            return Ok(app_identifier.to_string());
        }

        let url = self.api_url(&format!(
            "/search?term={}&lang=en&country=us",
            encode(app_identifier)
        ));
        let hits: Vec<SearchHit> = self.get_json(url, app_identifier).await?;

        let app_id = hits
            .into_iter()
            .next()
            .map(|hit| hit.app_id)
            .ok_or_else(|| ReviewSourceError::NotFound(app_identifier.to_string()))?;

        tracing::debug!(query = %app_identifier, app_id = %app_id, "Resolved app name");
        Ok(app_id)
    }
}

/// Package identifiers are dotted (com.example.app); anything else is a name
fn looks_like_package_id(app_identifier: &str) -> bool {
    app_identifier.contains('.')
}

/// Response types from the scraper service
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit {
    app_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppDetails {
    title: String,
    app_id: String,
    #[serde(default)]
    developer: String,
    #[serde(default)]
    icon: String,
    score: Option<f64>,
}

impl From<AppDetails> for AppMetadata {
    fn from(d: AppDetails) -> Self {
        Self {
            name: d.title,
            package_name: d.app_id,
            developer: d.developer,
            icon: d.icon,
            rating: d.score.map(render_rating).unwrap_or_default(),
        }
    }
}

/// Whole ratings keep their decimal point ("4.0", not "4")
fn render_rating(score: f64) -> String {
    format!("{:?}", score)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreReview {
    review_id: String,
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    user_image: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    score: u8,
    #[serde(default)]
    thumbs_up_count: u32,
    #[serde(default)]
    review_created_version: Option<String>,
    at: DateTime<Utc>,
    #[serde(default)]
    reply_content: Option<String>,
    #[serde(default)]
    replied_at: Option<DateTime<Utc>>,
}

impl From<StoreReview> for Review {
    fn from(r: StoreReview) -> Self {
        Self {
            id: r.review_id,
            user_name: r.user_name.unwrap_or_default(),
            user_image: r.user_image,
            content: r.content.unwrap_or_default(),
            score: r.score,
            thumbs_up_count: r.thumbs_up_count,
            review_created_version: r.review_created_version,
            at: r.at,
            reply_content: r.reply_content,
            reply_at: r.replied_at,
        }
    }
}

#[async_trait]
impl ReviewSource for PlayStoreClient {
    async fn fetch_reviews(
        &self,
        app_identifier: &str,
    ) -> Result<(AppMetadata, Vec<Review>), ReviewSourceError> {
        let app_id = self.resolve_app_id(app_identifier).await?;
        let encoded = encode(&app_id);

        let details: AppDetails = self
            .get_json(self.api_url(&format!("/apps/{}", encoded)), &app_id)
            .await?;

        let reviews: Vec<StoreReview> = self
            .get_json(
                self.api_url(&format!(
                    "/apps/{}/reviews?lang=en&country=us&sort=newest&count={}",
                    encoded, self.batch_size
                )),
                &app_id,
            )
            .await?;

        tracing::debug!(app_id = %app_id, reviews = reviews.len(), "Fetched review batch");

        Ok((
            details.into(),
            reviews.into_iter().map(Review::from).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_identifiers_are_package_ids() {
        assert!(looks_like_package_id("com.spotify.music"));
        assert!(!looks_like_package_id("spotify"));
        assert!(!looks_like_package_id("Spotify Music"));
    }

    #[test]
    fn store_review_maps_missing_fields_to_defaults() {
        let raw = serde_json::json!({
            "reviewId": "gp:abc",
            "content": null,
            "score": 4,
            "at": "2026-01-02T03:04:05Z",
            "repliedAt": "2026-01-03T00:00:00Z"
        });

        let review: Review = serde_json::from_value::<StoreReview>(raw).unwrap().into();

        assert_eq!(review.id, "gp:abc");
        assert_eq!(review.content, "");
        assert!(!review.has_text());
        assert_eq!(review.user_name, "");
        assert_eq!(review.thumbs_up_count, 0);
        assert!(review.reply_at.is_some());
    }

    #[test]
    fn app_details_render_rating_as_string() {
        let raw = serde_json::json!({
            "title": "Example",
            "appId": "com.example.app",
            "developer": "Example Inc.",
            "icon": "https://example.com/icon.png",
            "score": 4.5
        });

        let meta: AppMetadata = serde_json::from_value::<AppDetails>(raw).unwrap().into();

        assert_eq!(meta.package_name, "com.example.app");
        assert_eq!(meta.rating, "4.5");
    }

    #[test]
    fn whole_rating_keeps_decimal_point() {
        let raw = serde_json::json!({
            "title": "Example",
            "appId": "com.example.app",
            "score": 4.0
        });

        let meta: AppMetadata = serde_json::from_value::<AppDetails>(raw).unwrap().into();

        assert_eq!(meta.rating, "4.0");
        assert_eq!(render_rating(3.8571428), "3.8571428");
    }
}
