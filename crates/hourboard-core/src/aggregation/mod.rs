//! Aggregation engine - pure functions over event and user lists
//!
//! Nothing here fails: missing hours count as zero and missing tags or
//! dates simply never match a filter.

mod filter;
mod leaderboard;

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::entities::{Event, HistoricalEvent};
use crate::value_objects::SchoolYear;

pub use filter::{filter_events, EventFilter};
pub use leaderboard::compute_leaderboard;

/// Tag that the category split singles out by default
pub const PRIMARY_TAG: &str = "NHS";

/// Read access shared by live and archived events
pub trait HourEntry {
    fn hours(&self) -> Option<u32>;
    fn tag(&self) -> Option<&str>;
    fn name(&self) -> &str;
    fn date(&self) -> Option<NaiveDate>;
}

impl HourEntry for Event {
    fn hours(&self) -> Option<u32> {
        self.hours
    }
    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

impl HourEntry for HistoricalEvent {
    fn hours(&self) -> Option<u32> {
        self.hours
    }
    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

/// Hours on each side of a category predicate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySplit {
    pub matching: u64,
    pub non_matching: u64,
}

/// Sum of hours, missing hours counted as zero
pub fn compute_user_totals<E: HourEntry>(events: &[E]) -> u64 {
    events.iter().map(|e| u64::from(e.hours().unwrap_or(0))).sum()
}

/// Summed hours per tag; untagged events are left out
pub fn group_hours_by_tag<E: HourEntry>(events: &[E]) -> BTreeMap<String, u64> {
    let mut groups = BTreeMap::new();
    for event in events {
        if let Some(tag) = event.tag() {
            *groups.entry(tag.to_string()).or_insert(0) += u64::from(event.hours().unwrap_or(0));
        }
    }
    groups
}

/// Partition hours by a predicate
pub fn split_by_category<E, F>(events: &[E], predicate: F) -> CategorySplit
where
    E: HourEntry,
    F: Fn(&E) -> bool,
{
    events.iter().fold(CategorySplit::default(), |mut split, event| {
        let hours = u64::from(event.hours().unwrap_or(0));
        if predicate(event) {
            split.matching += hours;
        } else {
            split.non_matching += hours;
        }
        split
    })
}

/// Hours tagged exactly `primary_tag` versus everything else
pub fn split_by_primary_tag<E: HourEntry>(events: &[E], primary_tag: &str) -> CategorySplit {
    split_by_category(events, |e| e.tag() == Some(primary_tag))
}

/// Tags present in the list, first-seen order
pub fn distinct_tags<E: HourEntry>(events: &[E]) -> Vec<String> {
    let mut seen = Vec::<String>::new();
    for tag in events.iter().filter_map(|e| e.tag()) {
        if !seen.iter().any(|t| t == tag) {
            seen.push(tag.to_string());
        }
    }
    seen
}

/// Sorted unique school years found in the archive, always including `current`
pub fn available_school_years(historical: &[HistoricalEvent], current: &SchoolYear) -> Vec<String> {
    let mut years: BTreeSet<String> = historical
        .iter()
        .map(|h| h.school_year.as_str().to_string())
        .collect();
    years.insert(current.as_str().to_string());
    years.into_iter().collect()
}
