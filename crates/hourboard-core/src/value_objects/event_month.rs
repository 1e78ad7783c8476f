//! Calendar month an event is recorded under
//!
//! Event dates carry no meaningful day; the hour-add workflow always stores
//! the first day of the month.

use chrono::{Datelike, NaiveDate};

use crate::error::DomainError;

/// Validated month/year pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventMonth {
    first_day: NaiveDate,
}

impl EventMonth {
    /// Earliest year accepted at entry
    pub const MIN_YEAR: i32 = 2000;

    /// Validate a month (1-12) and a representable year (>= 2000)
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if year < Self::MIN_YEAR {
            return Err(DomainError::InvalidEventMonth { year, month });
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(DomainError::InvalidEventMonth { year, month })?;
        Ok(Self { first_day })
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// First day of the month, the normalized event date
    #[inline]
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }
}
