//! In-process implementation of AdvisorRequestRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::instrument;

use hourboard_core::traits::{AdvisorRequestRepository, RepoResult};
use hourboard_core::{AdvisorRequest, DocumentId, DomainError};

/// In-process `advisorRequests` collection
#[derive(Debug, Clone, Default)]
pub struct MemoryAdvisorRequestRepository {
    docs: Arc<RwLock<Vec<AdvisorRequest>>>,
}

impl MemoryAdvisorRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdvisorRequestRepository for MemoryAdvisorRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<AdvisorRequest>> {
        Ok(self.docs.read().iter().find(|r| r.id == *id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<AdvisorRequest>> {
        Ok(self.docs.read().clone())
    }

    #[instrument(skip(self))]
    async fn find_pending_by_user(&self, user_id: &DocumentId) -> RepoResult<Vec<AdvisorRequest>> {
        Ok(self
            .docs
            .read()
            .iter()
            .filter(|r| r.user_id == *user_id && r.is_pending())
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, request: &AdvisorRequest) -> RepoResult<()> {
        self.docs.write().push(request.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        let mut docs = self.docs.write();
        let before = docs.len();
        docs.retain(|r| r.id != *id);
        if docs.len() == before {
            return Err(DomainError::RequestNotFound(id.clone()));
        }
        Ok(())
    }
}
