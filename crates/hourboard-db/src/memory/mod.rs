//! In-process document store
//!
//! Each collection is an insertion-ordered `Vec` behind a `parking_lot`
//! lock. Locks are never held across an await point. Intended for local
//! runs and tests, and for the few hundred records this system targets.

mod advisor_request;
mod archival_run;
mod event;
mod historical_event;
mod user;

use async_trait::async_trait;
use hourboard_core::traits::StoreHealth;

pub use advisor_request::MemoryAdvisorRequestRepository;
pub use archival_run::MemoryArchivalRunRepository;
pub use event::MemoryEventRepository;
pub use historical_event::MemoryHistoricalEventRepository;
pub use user::MemoryUserRepository;

/// The in-process store is always reachable
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStoreHealth;

#[async_trait]
impl StoreHealth for MemoryStoreHealth {
    async fn is_healthy(&self) -> bool {
        true
    }
}
