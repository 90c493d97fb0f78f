//! In-memory analysis repository
//!
//! Keeps analyses for the lifetime of the process. Starts closed; `open` must be
//! called before use, and `close` drops everything stored.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{AnalysisId, AnalysisReport, StoredAnalysis};
use crate::domain::ports::AnalysisRepository;
use crate::error::StoreError;

#[derive(Default)]
pub struct InMemoryAnalysisRepository {
    open: AtomicBool,
    analyses: RwLock<HashMap<AnalysisId, StoredAnalysis>>,
}

impl InMemoryAnalysisRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.open.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(StoreError::Closed)
        }
    }
}

#[cfg(test)]
impl InMemoryAnalysisRepository {
    /// A repository that is already open
    pub fn opened() -> Self {
        let repo = Self::new();
        repo.open.store(true, Ordering::Release);
        repo
    }

    /// Snapshot of everything stored, oldest first
    pub fn all(&self) -> Vec<StoredAnalysis> {
        let mut all: Vec<_> = self.analyses.read().unwrap().values().cloned().collect();
        all.sort_by_key(|a| a.created_at);
        all
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    async fn open(&self) -> Result<(), StoreError> {
        self.open.store(true, Ordering::Release);
        tracing::debug!("Analysis store opened");
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.open.store(false, Ordering::Release);
        let mut analyses = self
            .analyses
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        let dropped = analyses.len();
        analyses.clear();
        tracing::debug!(dropped, "Analysis store closed");
        Ok(())
    }

    async fn store(&self, report: AnalysisReport) -> Result<StoredAnalysis, StoreError> {
        self.ensure_open()?;

        let stored = StoredAnalysis {
            id: AnalysisId::new(),
            created_at: Utc::now(),
            report,
        };

        let mut analyses = self
            .analyses
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        analyses.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn get(&self, id: &AnalysisId) -> Result<Option<StoredAnalysis>, StoreError> {
        self.ensure_open()?;

        let analyses = self
            .analyses
            .read()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        Ok(analyses.get(id).cloned())
    }
}
