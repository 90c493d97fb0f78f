//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod memory;
pub mod openai;
pub mod play_store;

pub use memory::InMemoryAnalysisRepository;
pub use openai::OpenAiClassifier;
pub use play_store::PlayStoreClient;
