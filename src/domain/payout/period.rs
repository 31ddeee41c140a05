//! Calendar-month period for payout records

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A calendar month, stored as the first day of that month.
///
/// The only accepted textual form is `"YYYY-MM"`; anything else is a
/// validation error at the boundary, never silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodMonth(NaiveDate);

impl PeriodMonth {
    /// Parse a strict `"YYYY-MM"` literal: four-digit year, two-digit month,
    /// month in 1..=12.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::validation(format!("invalid period month '{}'", input));

        let (year, month) = input.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Normalize an arbitrary stored date onto its month
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    /// The first day of the month, the stored representation
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for PeriodMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.0.year(), self.0.month())
    }
}
