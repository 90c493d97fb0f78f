//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod analysis_service;
pub mod fan_out;
pub mod sentiment_reducer;

pub use analysis_service::AnalysisService;
pub use fan_out::DEFAULT_CONCURRENCY;
