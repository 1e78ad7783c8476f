//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in hourboard-core.
//! Each repository handles one collection table.

mod advisor_request;
mod archival_run;
mod error;
mod event;
mod health;
mod historical_event;
mod user;

pub use advisor_request::PgAdvisorRequestRepository;
pub use archival_run::PgArchivalRunRepository;
pub use event::PgEventRepository;
pub use health::PgStoreHealth;
pub use historical_event::PgHistoricalEventRepository;
pub use user::PgUserRepository;
