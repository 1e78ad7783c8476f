//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` with camelCase field names
//! matching the document schema.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use hourboard_core::{DashboardView, Role};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Users & session
// ============================================================================

/// Stored user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub hours: u32,
    pub temporary_advisor: bool,
}

/// Result of the login-time provisioning call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserResponse,
    pub view: DashboardView,
    pub available_views: Vec<DashboardView>,
    pub capabilities: Vec<&'static str>,
}

/// Which dashboard to render
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewResponse {
    pub view: DashboardView,
    pub available_views: Vec<DashboardView>,
}

// ============================================================================
// Events
// ============================================================================

/// Live event
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub hours: Option<u32>,
    pub tag: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Archived event
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEventResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub hours: Option<u32>,
    pub tag: Option<String>,
    pub date: Option<NaiveDate>,
    pub school_year: String,
}

/// Outcome of recording hours
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHoursResponse {
    pub event: EventResponse,
    pub total_hours: u32,
}

/// Outcome of the bulk hour reset
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetHoursResponse {
    pub users_reset: usize,
}

// ============================================================================
// Archival & history
// ============================================================================

/// Outcome of a completed archival run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalResponse {
    pub school_year: String,
    /// Events moved across every attempt of this run
    pub events_archived: u32,
    pub users_reset: usize,
    pub status: String,
    pub completed_at: Option<DateTime<Utc>>,
}

/// School years offered by the history selector
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableYearsResponse {
    pub current: String,
    pub years: Vec<String>,
}

/// Outcome of a historical delete
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteHistoryResponse {
    pub deleted: usize,
}

// ============================================================================
// Requests
// ============================================================================

/// Advisor request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorRequestResponse {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Dashboard
// ============================================================================

/// One leaderboard row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub hours: u32,
}

/// Hours on and off the primary tag
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySplitResponse {
    pub tag: String,
    pub matching: u64,
    pub non_matching: u64,
}

/// Member (and officer read-only) dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDashboardResponse {
    pub user: UserResponse,
    /// Events left after the filters
    pub events: Vec<EventResponse>,
    /// Sum over every event of the user, ignoring filters
    pub total_hours: u64,
    pub hours_by_tag: BTreeMap<String, u64>,
    pub primary_split: CategorySplitResponse,
    /// Tags present on the user's events, for the tag selector
    pub tags: Vec<String>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
