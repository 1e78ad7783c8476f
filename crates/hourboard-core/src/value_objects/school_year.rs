//! School year label used to tag archived events

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Free-form, non-blank school-year label such as `2024-2025`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolYear(String);

impl SchoolYear {
    /// Longest label accepted
    pub const MAX_LEN: usize = 64;

    /// Validate a caller-supplied label
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingSchoolYear);
        }
        if trimmed.len() > Self::MAX_LEN || trimmed.contains('/') {
            return Err(DomainError::ValidationError(format!(
                "Invalid school year label: {trimmed}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Label for the school year starting in the calendar year of `today`
    pub fn current(today: NaiveDate) -> Self {
        let year = today.year();
        Self(format!("{}-{}", year, year + 1))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchoolYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SchoolYear {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let year = SchoolYear::parse(" 2024-2025 ").unwrap();
        assert_eq!(year.as_str(), "2024-2025");
    }

    #[test]
    fn test_parse_blank_is_missing() {
        assert!(matches!(
            SchoolYear::parse("   "),
            Err(DomainError::MissingSchoolYear)
        ));
    }

    #[test]
    fn test_parse_rejects_separator() {
        assert!(SchoolYear::parse("2024/2025").is_err());
    }

    #[test]
    fn test_current() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(SchoolYear::current(today).as_str(), "2025-2026");
    }
}
