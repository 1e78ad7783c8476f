use chrono::Datelike;

use super::HourEntry;

/// Member-view filters; `None` or blank values match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Calendar month 1-12
    pub month: Option<u32>,
    /// Case-insensitive substring of the event name, trimmed before matching
    pub search: Option<String>,
    /// Exact tag
    pub tag: Option<String>,
}

impl EventFilter {
    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn tag_value(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    /// Check a single entry against every active filter
    pub fn matches<E: HourEntry>(&self, event: &E) -> bool {
        if let Some(month) = self.month {
            match event.date() {
                Some(date) if date.month() == month => {}
                _ => return false,
            }
        }
        if let Some(term) = self.search_term() {
            if !event.name().to_lowercase().contains(&term) {
                return false;
            }
        }
        if let Some(tag) = self.tag_value() {
            if event.tag() != Some(tag) {
                return false;
            }
        }
        true
    }
}

/// Events that satisfy every active filter, order preserved
pub fn filter_events<E: HourEntry + Clone>(events: &[E], filter: &EventFilter) -> Vec<E> {
    events.iter().filter(|e| filter.matches(*e)).cloned().collect()
}
