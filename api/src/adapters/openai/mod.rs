//! OpenAI adapter
//!
//! Sentiment classification over the chat completions API.

pub mod client;

pub use client::OpenAiClassifier;
