//! Request DTOs for API endpoints
//!
//! Bodies implement `Deserialize` and `Validate`; query strings only
//! `Deserialize`. Domain checks (hour parsing, month ranges, tag membership)
//! run in the services so they hold for every caller.

use hourboard_core::Role;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Hours
// ============================================================================

/// Hours as typed into the form: a string that must parse, or a bare number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HoursInput {
    Number(i64),
    Text(String),
}

impl HoursInput {
    /// Parse into a positive hour count
    pub fn positive(&self) -> Option<u32> {
        let value = match self {
            Self::Number(n) => u32::try_from(*n).ok()?,
            Self::Text(s) => s.trim().parse::<u32>().ok()?,
        };
        (value > 0).then_some(value)
    }

    pub fn raw(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Record hours for a user
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddHoursRequest {
    #[validate(length(min = 1, message = "User is required"))]
    pub user_id: String,

    pub hours: HoursInput,

    #[validate(length(min = 1, max = 200, message = "Event name must be 1-200 characters"))]
    pub event_name: String,

    pub tag: String,

    pub month: u32,

    pub year: i32,
}

// ============================================================================
// Users
// ============================================================================

/// Create a user from the advisor panel
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    pub role: Role,
}

/// Change a user's role
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRoleRequest {
    pub role: Role,
}

/// Flip the temporary-advisor flag from the value the caller last saw
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToggleTemporaryAdvisorRequest {
    pub current_value: bool,
}

// ============================================================================
// Events
// ============================================================================

/// Reassign an event's tag
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReassignTagRequest {
    #[validate(length(min = 1, message = "Tag is required"))]
    pub tag: String,
}

/// `GET /events` query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsQuery {
    pub user_id: Option<String>,
}

// ============================================================================
// Archival & history
// ============================================================================

/// Start (or resume) the school-year rollover
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRequest {
    #[serde(default)]
    pub school_year: String,
}

/// `GET /history` and `DELETE /history` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    pub year: Option<String>,
}

impl HistoryQuery {
    /// The requested year, ignoring blanks
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref().map(str::trim).filter(|y| !y.is_empty())
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// `GET /dashboard` query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Another user to view (officers and above)
    pub user_id: Option<String>,
    pub month: Option<u32>,
    pub search: Option<String>,
    pub tag: Option<String>,
}
