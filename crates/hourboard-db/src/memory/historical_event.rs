//! In-process implementation of HistoricalEventRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::instrument;

use hourboard_core::traits::{HistoricalEventRepository, RepoResult};
use hourboard_core::{DocumentId, DomainError, HistoricalEvent, SchoolYear};

/// In-process `historicalEvents` collection
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoricalEventRepository {
    docs: Arc<RwLock<Vec<HistoricalEvent>>>,
}

impl MemoryHistoricalEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoricalEventRepository for MemoryHistoricalEventRepository {
    async fn find_all(&self) -> RepoResult<Vec<HistoricalEvent>> {
        Ok(self.docs.read().clone())
    }

    #[instrument(skip(self))]
    async fn find_by_school_year(&self, school_year: &SchoolYear) -> RepoResult<Vec<HistoricalEvent>> {
        Ok(self
            .docs
            .read()
            .iter()
            .filter(|h| h.school_year == *school_year)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn upsert(&self, event: &HistoricalEvent) -> RepoResult<()> {
        let mut docs = self.docs.write();
        match docs.iter_mut().find(|h| h.id == event.id) {
            Some(existing) => *existing = event.clone(),
            None => docs.push(event.clone()),
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        let mut docs = self.docs.write();
        let before = docs.len();
        docs.retain(|h| h.id != *id);
        if docs.len() == before {
            return Err(DomainError::EventNotFound(id.clone()));
        }
        Ok(())
    }
}
