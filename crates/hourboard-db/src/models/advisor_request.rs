//! Advisor request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for advisor_requests table
#[derive(Debug, Clone, FromRow)]
pub struct AdvisorRequestModel {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub status: String,
    pub requested_at: DateTime<Utc>,
}
