use std::env;
use std::str::FromStr;

use crate::app::DEFAULT_CONCURRENCY;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// API key for the OpenAI-compatible classifier
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    /// Request timeout for a single classifier call
    pub classifier_timeout_secs: u64,
    /// Base URL of the review source service
    pub review_source_url: String,
    /// Number of reviews fetched per analysis
    pub review_batch_size: usize,
    /// Maximum classifier calls in flight per batch
    pub classify_concurrency: usize,
    /// Allowed CORS origin (any origin when unset)
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_or("PORT", 8080),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            classifier_timeout_secs: parse_or("CLASSIFIER_TIMEOUT_SECS", 30),
            review_source_url: env::var("REVIEW_SOURCE_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            review_batch_size: parse_or("REVIEW_BATCH_SIZE", 100),
            classify_concurrency: parse_or("CLASSIFY_CONCURRENCY", DEFAULT_CONCURRENCY).max(1),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
        }
    }

    /// Check if the classifier has credentials configured
    pub fn classifier_configured(&self) -> bool {
        !self.openai_api_key.is_empty()
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
