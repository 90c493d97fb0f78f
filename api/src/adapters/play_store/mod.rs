//! Play Store adapter
//!
//! Review source backed by a Play Store scraper service.

pub mod client;

pub use client::PlayStoreClient;
