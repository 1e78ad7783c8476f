//! Test fixtures and data generators
//!
//! Request bodies and response shapes used by the integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A fresh user id with the given prefix
pub fn unique_uid(prefix: &str) -> String {
    format!("{prefix}-{}", unique_suffix())
}

/// `POST /hours` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHoursRequest {
    pub user_id: String,
    pub hours: serde_json::Value,
    pub event_name: String,
    pub tag: String,
    pub month: u32,
    pub year: i32,
}

impl AddHoursRequest {
    /// Hours for `user_id` in March 2025, tagged NHS
    pub fn new(user_id: &str, hours: impl Into<serde_json::Value>) -> Self {
        Self {
            user_id: user_id.to_string(),
            hours: hours.into(),
            event_name: "Food drive".to_string(),
            tag: "NHS".to_string(),
            month: 3,
            year: 2025,
        }
    }

    pub fn tagged(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }
}

/// `POST /archive` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRequest {
    pub school_year: String,
}

impl ArchiveRequest {
    pub fn new(label: &str) -> Self {
        Self {
            school_year: label.to_string(),
        }
    }
}

/// Stored user as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub hours: u32,
    pub temporary_advisor: bool,
}

/// `POST /session` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserResponse,
    pub view: String,
    pub available_views: Vec<String>,
    pub capabilities: Vec<String>,
}

/// Live event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub hours: Option<u32>,
    pub tag: Option<String>,
    pub date: Option<String>,
}

/// `POST /hours` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHoursResponse {
    pub event: EventResponse,
    pub total_hours: u32,
}

/// Leaderboard row
#[derive(Debug, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub hours: u32,
}

/// `POST /archive` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalResponse {
    pub school_year: String,
    pub events_archived: u32,
    pub users_reset: usize,
    pub status: String,
}

/// Archived event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEventResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub school_year: String,
}

/// Pending advisor request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorRequestResponse {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub status: String,
}
