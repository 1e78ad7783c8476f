//! Event entity - one hour entry owned by a user
//!
//! Stored documents may be partially written, so `hours`, `tag` and `date`
//! are optional here. Aggregation treats missing values permissively.

use chrono::NaiveDate;

use crate::value_objects::{DocumentId, EventMonth};

/// Document in the `events` collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: DocumentId,
    pub user_id: DocumentId,
    pub name: String,
    pub hours: Option<u32>,
    pub tag: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Event {
    /// Create a fully populated event dated the first of `month`
    pub fn new(
        user_id: DocumentId,
        name: String,
        hours: u32,
        tag: String,
        month: EventMonth,
    ) -> Self {
        Self {
            id: DocumentId::generate(),
            user_id,
            name,
            hours: Some(hours),
            tag: Some(tag),
            date: Some(month.first_day()),
        }
    }

    /// Reassign the tag
    pub fn set_tag(&mut self, tag: String) {
        self.tag = Some(tag);
    }
}
