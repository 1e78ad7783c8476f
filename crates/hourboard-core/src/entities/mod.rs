//! Domain entities - the documents of each collection

mod advisor_request;
mod archival_run;
mod event;
mod historical_event;
mod user;

pub use advisor_request::{AdvisorRequest, RequestStatus};
pub use archival_run::{ArchivalRun, ArchivalStatus};
pub use event::Event;
pub use historical_event::HistoricalEvent;
pub use user::User;
