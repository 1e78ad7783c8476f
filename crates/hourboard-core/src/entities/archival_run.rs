//! Archival run - progress marker of one school-year rollover

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::SchoolYear;

/// Derived state of an archival run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchivalStatus {
    InProgress,
    EventsArchived,
    Completed,
}

impl ArchivalStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::EventsArchived => "events_archived",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ArchivalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document in the `archivalRuns` collection, keyed by school year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivalRun {
    pub school_year: SchoolYear,
    pub started_at: DateTime<Utc>,
    pub events_archived: u32,
    pub events_archived_at: Option<DateTime<Utc>>,
    pub hours_reset_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ArchivalRun {
    /// Start a new run
    pub fn start(school_year: SchoolYear) -> Self {
        Self {
            school_year,
            started_at: Utc::now(),
            events_archived: 0,
            events_archived_at: None,
            hours_reset_at: None,
            completed_at: None,
        }
    }

    pub fn status(&self) -> ArchivalStatus {
        if self.completed_at.is_some() {
            ArchivalStatus::Completed
        } else if self.events_archived_at.is_some() {
            ArchivalStatus::EventsArchived
        } else {
            ArchivalStatus::InProgress
        }
    }

    /// Add records moved by an attempt that did not finish
    pub fn record_archived(&mut self, count: u32) {
        self.events_archived = self.events_archived.saturating_add(count);
    }

    /// Record that every live event was copied and deleted
    pub fn mark_events_archived(&mut self, count: u32) {
        self.record_archived(count);
        self.events_archived_at = Some(Utc::now());
    }

    pub fn mark_hours_reset(&mut self) {
        self.hours_reset_at = Some(Utc::now());
    }

    pub fn mark_completed(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    #[inline]
    pub fn hours_reset_done(&self) -> bool {
        self.hours_reset_at.is_some()
    }
}
