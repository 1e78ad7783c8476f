//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod advisor_requests;
pub mod archive;
pub mod dashboard;
pub mod events;
pub mod health;
pub mod history;
pub mod hours;
pub mod session;
pub mod users;

use hourboard_core::DocumentId;

use crate::response::{ApiError, ApiResult};

/// Parse an optional id from a query string, treating blanks as absent
pub(crate) fn optional_id(raw: Option<&str>, field: &str) -> ApiResult<Option<DocumentId>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => DocumentId::parse(s)
            .map(Some)
            .map_err(|_| ApiError::invalid_query(format!("Invalid {field}"))),
        None => Ok(None),
    }
}
