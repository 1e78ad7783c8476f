//! Value objects - immutable types that represent domain concepts

mod capabilities;
mod document_id;
mod event_month;
mod role;
mod school_year;

pub use capabilities::Capabilities;
pub use document_id::{DocumentId, DocumentIdParseError};
pub use event_month::EventMonth;
pub use role::{Role, RoleParseError};
pub use school_year::SchoolYear;
