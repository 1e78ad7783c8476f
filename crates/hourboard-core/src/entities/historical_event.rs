//! Historical event - an archived copy of an event

use chrono::NaiveDate;

use super::Event;
use crate::value_objects::{DocumentId, SchoolYear};

/// Document in the `historicalEvents` collection, keyed by the live event id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalEvent {
    pub id: DocumentId,
    pub user_id: DocumentId,
    pub name: String,
    pub hours: Option<u32>,
    pub tag: Option<String>,
    pub date: Option<NaiveDate>,
    pub school_year: SchoolYear,
}

impl HistoricalEvent {
    /// Copy a live event under a school-year label
    pub fn archive(event: &Event, school_year: &SchoolYear) -> Self {
        Self {
            id: event.id.clone(),
            user_id: event.user_id.clone(),
            name: event.name.clone(),
            hours: event.hours,
            tag: event.tag.clone(),
            date: event.date,
            school_year: school_year.clone(),
        }
    }
}
