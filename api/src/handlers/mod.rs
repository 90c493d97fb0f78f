//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod reviews;

pub use reviews::{analyze_reviews, get_analysis};
