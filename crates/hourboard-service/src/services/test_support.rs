//! Shared fixtures for service tests: in-process contexts and
//! failure-injecting repository wrappers

use std::sync::Arc;

use async_trait::async_trait;
use hourboard_common::{Identity, IdentityTokenService};
use hourboard_core::traits::{
    AdvisorRequestRepository, EventRepository, HistoricalEventRepository, RepoResult,
    UserRepository,
};
use hourboard_core::{
    AdvisorRequest, DocumentId, DomainError, Event, EventMonth, HistoricalEvent, Role, SchoolYear,
    Session, User,
};
use hourboard_db::{
    MemoryAdvisorRequestRepository, MemoryEventRepository, MemoryHistoricalEventRepository,
    MemoryUserRepository,
};

use super::context::{ServiceContext, ServiceContextBuilder, WorkflowSettings};

pub fn builder() -> ServiceContextBuilder {
    ServiceContextBuilder::in_memory()
        .identity_service(Arc::new(IdentityTokenService::new("test-secret", 0)))
}

pub fn context() -> ServiceContext {
    builder().build().unwrap()
}

pub fn context_with(settings: WorkflowSettings) -> ServiceContext {
    builder().settings(settings).build().unwrap()
}

pub fn identity(uid: &str, name: &str) -> Identity {
    Identity {
        uid: DocumentId::from(uid),
        name: name.to_string(),
        email: format!("{uid}@example.com"),
    }
}

pub fn session(id: &str, role: Role) -> Session {
    Session {
        user_id: DocumentId::from(id),
        name: id.to_string(),
        email: format!("{id}@example.com"),
        role,
        temporary_advisor: false,
    }
}

pub fn advisor() -> Session {
    session("advisor", Role::Advisor)
}

pub async fn seed_user(ctx: &ServiceContext, id: &str, role: Role, hours: u32) -> User {
    let mut user = User::new(
        DocumentId::from(id),
        id.to_string(),
        format!("{id}@example.com"),
        role,
    );
    user.hours = hours;
    ctx.user_repo().create(&user).await.unwrap();
    user
}

pub async fn seed_event(
    ctx: &ServiceContext,
    user_id: &str,
    name: &str,
    hours: u32,
    tag: &str,
    (year, month): (i32, u32),
) -> Event {
    let event = Event::new(
        DocumentId::from(user_id),
        name.to_string(),
        hours,
        tag.to_string(),
        EventMonth::new(year, month).unwrap(),
    );
    ctx.event_repo().create(&event).await.unwrap();
    event
}

fn injected(op: &str, id: &DocumentId) -> DomainError {
    DomainError::StoreError(format!("injected {op} failure for {id}"))
}

/// Users whose `set_hours` fails
#[derive(Clone)]
pub struct FlakyUserRepository {
    pub inner: MemoryUserRepository,
    pub fail_set_hours: Vec<DocumentId>,
}

#[async_trait]
impl UserRepository for FlakyUserRepository {
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<User>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> RepoResult<Vec<User>> {
        self.inner.find_all().await
    }

    async fn find_by_role(&self, role: Role) -> RepoResult<Vec<User>> {
        self.inner.find_by_role(role).await
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.inner.create(user).await
    }

    async fn update_role(&self, id: &DocumentId, role: Role) -> RepoResult<()> {
        self.inner.update_role(id, role).await
    }

    async fn set_hours(&self, id: &DocumentId, hours: u32) -> RepoResult<()> {
        if self.fail_set_hours.contains(id) {
            return Err(injected("set_hours", id));
        }
        self.inner.set_hours(id, hours).await
    }

    async fn increment_hours(&self, id: &DocumentId, delta: u32) -> RepoResult<u32> {
        self.inner.increment_hours(id, delta).await
    }

    async fn set_temporary_advisor(&self, id: &DocumentId, value: bool) -> RepoResult<()> {
        self.inner.set_temporary_advisor(id, value).await
    }

    async fn compare_and_set_temporary_advisor(
        &self,
        id: &DocumentId,
        expected: bool,
        new: bool,
    ) -> RepoResult<bool> {
        self.inner
            .compare_and_set_temporary_advisor(id, expected, new)
            .await
    }

    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        self.inner.delete(id).await
    }
}

/// Events whose `delete` fails
#[derive(Clone)]
pub struct FlakyEventRepository {
    pub inner: MemoryEventRepository,
    pub fail_delete: Vec<DocumentId>,
}

#[async_trait]
impl EventRepository for FlakyEventRepository {
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Event>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        self.inner.find_all().await
    }

    async fn find_by_user(&self, user_id: &DocumentId) -> RepoResult<Vec<Event>> {
        self.inner.find_by_user(user_id).await
    }

    async fn create(&self, event: &Event) -> RepoResult<()> {
        self.inner.create(event).await
    }

    async fn update_tag(&self, id: &DocumentId, tag: &str) -> RepoResult<()> {
        self.inner.update_tag(id, tag).await
    }

    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        if self.fail_delete.contains(id) {
            return Err(injected("delete", id));
        }
        self.inner.delete(id).await
    }
}

/// Historical copies of these event ids fail to write
#[derive(Clone)]
pub struct FlakyHistoricalEventRepository {
    pub inner: MemoryHistoricalEventRepository,
    pub fail_upsert: Vec<DocumentId>,
}

#[async_trait]
impl HistoricalEventRepository for FlakyHistoricalEventRepository {
    async fn find_all(&self) -> RepoResult<Vec<HistoricalEvent>> {
        self.inner.find_all().await
    }

    async fn find_by_school_year(
        &self,
        school_year: &SchoolYear,
    ) -> RepoResult<Vec<HistoricalEvent>> {
        self.inner.find_by_school_year(school_year).await
    }

    async fn upsert(&self, event: &HistoricalEvent) -> RepoResult<()> {
        if self.fail_upsert.contains(&event.id) {
            return Err(injected("upsert", &event.id));
        }
        self.inner.upsert(event).await
    }

    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        self.inner.delete(id).await
    }
}

/// Requests whose `delete` fails
#[derive(Clone)]
pub struct FlakyAdvisorRequestRepository {
    pub inner: MemoryAdvisorRequestRepository,
    pub fail_delete: Vec<DocumentId>,
}

#[async_trait]
impl AdvisorRequestRepository for FlakyAdvisorRequestRepository {
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<AdvisorRequest>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> RepoResult<Vec<AdvisorRequest>> {
        self.inner.find_all().await
    }

    async fn find_pending_by_user(
        &self,
        user_id: &DocumentId,
    ) -> RepoResult<Vec<AdvisorRequest>> {
        self.inner.find_pending_by_user(user_id).await
    }

    async fn create(&self, request: &AdvisorRequest) -> RepoResult<()> {
        self.inner.create(request).await
    }

    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        if self.fail_delete.contains(id) {
            return Err(injected("delete", id));
        }
        self.inner.delete(id).await
    }
}
