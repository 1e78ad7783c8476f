//! Repository traits (ports) - define the interface for data access
//!
//! One trait per collection of the document store. The domain layer defines
//! what it needs, and the infrastructure layer provides the implementation.
//! Retrieval order of `find_all` is the store's natural order and is what
//! the leaderboard's tie-breaking relies on.

use async_trait::async_trait;

use crate::entities::{AdvisorRequest, ArchivalRun, Event, HistoricalEvent, User};
use crate::error::DomainError;
use crate::value_objects::{DocumentId, Role, SchoolYear};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<User>>;

    /// All users in retrieval order
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Users holding a given role
    async fn find_by_role(&self, role: Role) -> RepoResult<Vec<User>>;

    /// Create a new user; fails with `UserAlreadyExists` if the id is taken
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Persist a new role
    async fn update_role(&self, id: &DocumentId, role: Role) -> RepoResult<()>;

    /// Overwrite the hour total
    async fn set_hours(&self, id: &DocumentId, hours: u32) -> RepoResult<()>;

    /// Add to the hour total in a single store-side step, returning the new total
    async fn increment_hours(&self, id: &DocumentId, delta: u32) -> RepoResult<u32>;

    /// Overwrite the temporary-advisor flag
    async fn set_temporary_advisor(&self, id: &DocumentId, value: bool) -> RepoResult<()>;

    /// Set the flag to `new` only if it currently equals `expected`
    ///
    /// Returns false when the stored value differs.
    async fn compare_and_set_temporary_advisor(
        &self,
        id: &DocumentId,
        expected: bool,
        new: bool,
    ) -> RepoResult<bool>;

    /// Delete a user record (events are not touched)
    async fn delete(&self, id: &DocumentId) -> RepoResult<()>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Event>>;

    /// All live events in retrieval order
    async fn find_all(&self) -> RepoResult<Vec<Event>>;

    /// Events owned by one user
    async fn find_by_user(&self, user_id: &DocumentId) -> RepoResult<Vec<Event>>;

    async fn create(&self, event: &Event) -> RepoResult<()>;

    /// Reassign an event's tag
    async fn update_tag(&self, id: &DocumentId, tag: &str) -> RepoResult<()>;

    async fn delete(&self, id: &DocumentId) -> RepoResult<()>;
}

// ============================================================================
// Advisor Request Repository
// ============================================================================

#[async_trait]
pub trait AdvisorRequestRepository: Send + Sync {
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<AdvisorRequest>>;

    /// All requests, oldest first
    async fn find_all(&self) -> RepoResult<Vec<AdvisorRequest>>;

    /// Pending requests submitted by one user
    async fn find_pending_by_user(&self, user_id: &DocumentId)
        -> RepoResult<Vec<AdvisorRequest>>;

    async fn create(&self, request: &AdvisorRequest) -> RepoResult<()>;

    async fn delete(&self, id: &DocumentId) -> RepoResult<()>;
}

// ============================================================================
// Historical Event Repository
// ============================================================================

#[async_trait]
pub trait HistoricalEventRepository: Send + Sync {
    /// All archived events
    async fn find_all(&self) -> RepoResult<Vec<HistoricalEvent>>;

    /// Archived events of one school year
    async fn find_by_school_year(&self, school_year: &SchoolYear)
        -> RepoResult<Vec<HistoricalEvent>>;

    /// Insert or overwrite the copy keyed by its event id
    async fn upsert(&self, event: &HistoricalEvent) -> RepoResult<()>;

    async fn delete(&self, id: &DocumentId) -> RepoResult<()>;
}

// ============================================================================
// Archival Run Repository
// ============================================================================

#[async_trait]
pub trait ArchivalRunRepository: Send + Sync {
    /// Marker for a school year, if a run was ever started
    async fn find(&self, school_year: &SchoolYear) -> RepoResult<Option<ArchivalRun>>;

    /// Insert or overwrite the marker
    async fn save(&self, run: &ArchivalRun) -> RepoResult<()>;
}

// ============================================================================
// Store health
// ============================================================================

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Check the backing store is reachable
    async fn is_healthy(&self) -> bool;
}
