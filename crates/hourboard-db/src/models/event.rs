//! Event database model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub hours: Option<i32>,
    pub tag: Option<String>,
    pub date: Option<NaiveDate>,
}
