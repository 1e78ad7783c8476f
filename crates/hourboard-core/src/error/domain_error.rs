//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::DocumentId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(DocumentId),

    #[error("Event not found: {0}")]
    EventNotFound(DocumentId),

    #[error("Advisor request not found: {0}")]
    RequestNotFound(DocumentId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Hours must be a positive whole number, got '{0}'")]
    InvalidHours(String),

    #[error("Invalid event month {month}/{year}: month must be 1-12 and year at least 2000")]
    InvalidEventMonth { year: i32, month: u32 },

    #[error("Tag '{0}' is not one of the allowed tags")]
    InvalidTag(String),

    #[error("Please enter a valid school year")]
    MissingSchoolYear,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing capability: {0}")]
    MissingCapability(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists: {0}")]
    UserAlreadyExists(DocumentId),

    #[error("A pending advisor request already exists for user {0}")]
    PendingRequestExists(DocumentId),

    #[error("School year {0} has already been archived")]
    ArchiveAlreadyCompleted(String),

    #[error("Temporary advisor flag for user {0} changed since it was read")]
    StaleTemporaryAdvisorFlag(DocumentId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("{operation} failed for {failed} of {total} records")]
    PartialFailure {
        operation: &'static str,
        failed: usize,
        total: usize,
    },

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::RequestNotFound(_) => "UNKNOWN_REQUEST",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidHours(_) => "INVALID_HOURS",
            Self::InvalidEventMonth { .. } => "INVALID_EVENT_MONTH",
            Self::InvalidTag(_) => "INVALID_TAG",
            Self::MissingSchoolYear => "MISSING_SCHOOL_YEAR",

            // Authorization
            Self::MissingCapability(_) => "MISSING_CAPABILITY",

            // Conflict
            Self::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            Self::PendingRequestExists(_) => "PENDING_REQUEST_EXISTS",
            Self::ArchiveAlreadyCompleted(_) => "ARCHIVE_ALREADY_COMPLETED",
            Self::StaleTemporaryAdvisorFlag(_) => "STALE_TEMPORARY_ADVISOR_FLAG",

            // Infrastructure
            Self::PartialFailure { .. } => "PARTIAL_FAILURE",
            Self::StoreError(_) => "STORE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::EventNotFound(_) | Self::RequestNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidHours(_)
                | Self::InvalidEventMonth { .. }
                | Self::InvalidTag(_)
                | Self::MissingSchoolYear
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingCapability(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UserAlreadyExists(_)
                | Self::PendingRequestExists(_)
                | Self::ArchiveAlreadyCompleted(_)
                | Self::StaleTemporaryAdvisorFlag(_)
        )
    }
}
