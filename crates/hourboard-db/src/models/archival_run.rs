//! Archival run database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for archival_runs table
#[derive(Debug, Clone, FromRow)]
pub struct ArchivalRunModel {
    pub school_year: String,
    pub started_at: DateTime<Utc>,
    pub events_archived: i32,
    pub events_archived_at: Option<DateTime<Utc>>,
    pub hours_reset_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}
