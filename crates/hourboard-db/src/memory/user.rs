//! In-process implementation of UserRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::instrument;

use hourboard_core::traits::{RepoResult, UserRepository};
use hourboard_core::{DocumentId, DomainError, Role, User};

/// In-process `users` collection
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    docs: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `f` to the stored user, failing if it does not exist
    fn modify<T>(&self, id: &DocumentId, f: impl FnOnce(&mut User) -> RepoResult<T>) -> RepoResult<T> {
        let mut docs = self.docs.write();
        let user = docs
            .iter_mut()
            .find(|u| u.id == *id)
            .ok_or_else(|| DomainError::UserNotFound(id.clone()))?;
        f(user)
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<User>> {
        Ok(self.docs.read().iter().find(|u| u.id == *id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<User>> {
        Ok(self.docs.read().clone())
    }

    #[instrument(skip(self))]
    async fn find_by_role(&self, role: Role) -> RepoResult<Vec<User>> {
        Ok(self
            .docs
            .read()
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut docs = self.docs.write();
        if docs.iter().any(|u| u.id == user.id) {
            return Err(DomainError::UserAlreadyExists(user.id.clone()));
        }
        docs.push(user.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_role(&self, id: &DocumentId, role: Role) -> RepoResult<()> {
        self.modify(id, |user| {
            user.role = role;
            Ok(())
        })
    }

    #[instrument(skip(self))]
    async fn set_hours(&self, id: &DocumentId, hours: u32) -> RepoResult<()> {
        self.modify(id, |user| {
            user.hours = hours;
            Ok(())
        })
    }

    #[instrument(skip(self))]
    async fn increment_hours(&self, id: &DocumentId, delta: u32) -> RepoResult<u32> {
        self.modify(id, |user| {
            user.hours = user.hours_after(delta).ok_or_else(|| {
                DomainError::ValidationError(format!("Adding {delta} hours overflows the total"))
            })?;
            Ok(user.hours)
        })
    }

    #[instrument(skip(self))]
    async fn set_temporary_advisor(&self, id: &DocumentId, value: bool) -> RepoResult<()> {
        self.modify(id, |user| {
            user.temporary_advisor = value;
            Ok(())
        })
    }

    #[instrument(skip(self))]
    async fn compare_and_set_temporary_advisor(
        &self,
        id: &DocumentId,
        expected: bool,
        new: bool,
    ) -> RepoResult<bool> {
        self.modify(id, |user| {
            if user.temporary_advisor != expected {
                return Ok(false);
            }
            user.temporary_advisor = new;
            Ok(true)
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        let mut docs = self.docs.write();
        let before = docs.len();
        docs.retain(|u| u.id != *id);
        if docs.len() == before {
            return Err(DomainError::UserNotFound(id.clone()));
        }
        Ok(())
    }
}
