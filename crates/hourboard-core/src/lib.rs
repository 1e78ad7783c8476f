//! # hourboard-core
//!
//! Domain layer containing entities, value objects, store ports, the
//! aggregation engine, and the role policy.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod aggregation;
pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use aggregation::{
    available_school_years, compute_leaderboard, compute_user_totals, distinct_tags,
    filter_events, group_hours_by_tag, split_by_category, split_by_primary_tag, CategorySplit,
    EventFilter, HourEntry, PRIMARY_TAG,
};
pub use entities::{
    AdvisorRequest, ArchivalRun, ArchivalStatus, Event, HistoricalEvent, RequestStatus, User,
};
pub use error::DomainError;
pub use policy::{can_perform, capabilities, DashboardView, EventScope, Session};
pub use traits::{
    AdvisorRequestRepository, ArchivalRunRepository, EventRepository,
    HistoricalEventRepository, RepoResult, StoreHealth, UserRepository,
};
pub use value_objects::{
    Capabilities, DocumentId, DocumentIdParseError, EventMonth, Role, RoleParseError, SchoolYear,
};
