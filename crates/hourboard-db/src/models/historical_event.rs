//! Historical event database model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for historical_events table
#[derive(Debug, Clone, FromRow)]
pub struct HistoricalEventModel {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub hours: Option<i32>,
    pub tag: Option<String>,
    pub date: Option<NaiveDate>,
    pub school_year: String,
}
