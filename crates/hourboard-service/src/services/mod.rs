//! Workflow services
//!
//! Each service borrows the [`ServiceContext`], takes the caller's
//! [`Session`](hourboard_core::Session) explicitly, and checks the role
//! policy before its first store access.

pub mod advisor_requests;
pub mod archive;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod history;
pub mod hours;
pub mod session;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use advisor_requests::AdvisorRequestService;
pub use archive::ArchivalService;
pub use context::{ServiceContext, ServiceContextBuilder, WorkflowSettings};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};
pub use events::EventService;
pub use history::HistoryService;
pub use hours::HoursService;
pub use session::SessionService;
pub use users::UserService;
