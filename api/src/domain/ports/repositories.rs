//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., in-memory).

use async_trait::async_trait;

use crate::domain::entities::{AnalysisId, AnalysisReport, StoredAnalysis};
use crate::error::StoreError;

/// Repository for finished analyses
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Make the repository ready to accept reads and writes
    async fn open(&self) -> Result<(), StoreError>;

    /// Stop accepting reads and writes
    async fn close(&self) -> Result<(), StoreError>;

    /// Store a report, assigning it an identifier and creation timestamp
    async fn store(&self, report: AnalysisReport) -> Result<StoredAnalysis, StoreError>;

    /// Find a stored analysis by ID
    async fn get(&self, id: &AnalysisId) -> Result<Option<StoredAnalysis>, StoreError>;
}
