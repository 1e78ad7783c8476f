//! Model to entity mappers
//!
//! - `TryFrom<Model> for Entity`: convert database rows to domain objects.
//!   Rows that break a domain invariant (unknown role, negative count)
//!   surface as store errors.
//! - `to_db_count` / `from_db_count`: hour and record counts are unsigned
//!   in the domain and `INTEGER` in the tables

mod advisor_request;
mod archival_run;
mod event;
mod historical_event;
mod user;

use hourboard_core::DomainError;

/// Convert a domain count for binding
pub fn to_db_count(count: u32) -> Result<i32, DomainError> {
    i32::try_from(count)
        .map_err(|_| DomainError::ValidationError(format!("Count {count} is too large")))
}

/// Convert a stored count to the domain type
pub fn from_db_count(count: i32) -> Result<u32, DomainError> {
    u32::try_from(count)
        .map_err(|_| DomainError::StoreError(format!("Negative count {count} in store")))
}
