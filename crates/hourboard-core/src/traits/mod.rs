//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AdvisorRequestRepository, ArchivalRunRepository, EventRepository,
    HistoricalEventRepository, RepoResult, StoreHealth, UserRepository,
};
