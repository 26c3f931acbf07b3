//! Inclusive calendar-date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{SeedError, SeedResult};

/// Calendar format used for both parsing input and rendering SQL literals.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(input: &str) -> SeedResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| SeedError::Parse {
        input: input.to_string(),
        source,
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A `start..=end` span of days. A range whose start is after its end is
/// valid and simply contains no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses both bounds in `YYYY-MM-DD` form.
    pub fn parse(start: &str, end: &str) -> SeedResult<Self> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days in the range, zero when inverted.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    /// Ascending, contiguous days from `start` to `end`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        std::iter::successors(Some(self.start).filter(|d| *d <= end), move |d| {
            d.succ_opt().filter(|next| *next <= end)
        })
    }
}

/// Expands two `YYYY-MM-DD` strings into every day between them, inclusive,
/// formatted the same way.
pub fn enumerate(start: &str, end: &str) -> SeedResult<Vec<String>> {
    let range = DateRange::parse(start, end)?;
    let days: Vec<String> = range.days().map(format_date).collect();
    debug!(start, end, count = days.len(), "Enumerated date range");
    Ok(days)
}
