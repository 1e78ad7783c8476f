//! In-process implementation of EventRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::instrument;

use hourboard_core::traits::{EventRepository, RepoResult};
use hourboard_core::{DocumentId, DomainError, Event};

/// In-process `events` collection
#[derive(Debug, Clone, Default)]
pub struct MemoryEventRepository {
    docs: Arc<RwLock<Vec<Event>>>,
}

impl MemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Event>> {
        Ok(self.docs.read().iter().find(|e| e.id == *id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        Ok(self.docs.read().clone())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &DocumentId) -> RepoResult<Vec<Event>> {
        Ok(self
            .docs
            .read()
            .iter()
            .filter(|e| e.user_id == *user_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        let mut docs = self.docs.write();
        match docs.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event.clone(),
            None => docs.push(event.clone()),
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_tag(&self, id: &DocumentId, tag: &str) -> RepoResult<()> {
        let mut docs = self.docs.write();
        let event = docs
            .iter_mut()
            .find(|e| e.id == *id)
            .ok_or_else(|| DomainError::EventNotFound(id.clone()))?;
        event.set_tag(tag.to_string());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        let mut docs = self.docs.write();
        let before = docs.len();
        docs.retain(|e| e.id != *id);
        if docs.len() == before {
            return Err(DomainError::EventNotFound(id.clone()));
        }
        Ok(())
    }
}
