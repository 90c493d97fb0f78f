//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod classifier;
pub mod repositories;
pub mod review_source;

pub use classifier::SentimentClassifier;
pub use repositories::AnalysisRepository;
pub use review_source::ReviewSource;
