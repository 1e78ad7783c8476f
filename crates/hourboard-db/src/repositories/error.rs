//! Error handling utilities for repositories

use hourboard_core::{DocumentId, DomainError};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StoreError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::StoreError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: &DocumentId) -> DomainError {
    DomainError::UserNotFound(id.clone())
}

/// Create an "event not found" error
pub fn event_not_found(id: &DocumentId) -> DomainError {
    DomainError::EventNotFound(id.clone())
}

/// Create a "request not found" error
pub fn request_not_found(id: &DocumentId) -> DomainError {
    DomainError::RequestNotFound(id.clone())
}
