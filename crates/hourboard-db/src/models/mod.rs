//! Database models
//!
//! Rows of each collection table, decoded with SQLx `FromRow`.

mod advisor_request;
mod archival_run;
mod event;
mod historical_event;
mod user;

pub use advisor_request::AdvisorRequestModel;
pub use archival_run::ArchivalRunModel;
pub use event::EventModel;
pub use historical_event::HistoricalEventModel;
pub use user::UserModel;
