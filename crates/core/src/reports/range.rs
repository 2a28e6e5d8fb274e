//! Report date ranges.
//!
//! A missing start falls back to 1900-01-01 and a missing end to 2100-12-31.
//! Bounds are date-only and the end is inclusive, so a posting dated exactly
//! on the end date is in range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::journal::date::normalize_date;

/// Whether a report shows movement within a window or balances at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// At least one bound was given: rows show net movement in the window.
    Period,
    /// No bounds: rows show closing balances.
    AsOf,
}

/// Inclusive date window for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    has_start: bool,
    has_end: bool,
}

fn sentinel_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn sentinel_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or(NaiveDate::MAX)
}

impl DateRange {
    /// An unbounded range ("as of" mode).
    #[must_use]
    pub fn all() -> Self {
        Self {
            start: sentinel_start(),
            end: sentinel_end(),
            has_start: false,
            has_end: false,
        }
    }

    /// Creates a range from optional bounds.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if start is after end.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, ReportError> {
        let range = Self {
            start: start.unwrap_or_else(sentinel_start),
            end: end.unwrap_or_else(sentinel_end),
            has_start: start.is_some(),
            has_end: end.is_some(),
        };
        if range.start > range.end {
            return Err(ReportError::InvalidDateRange {
                start: range.start,
                end: range.end,
            });
        }
        Ok(range)
    }

    /// Parses optional bounds. Blank strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDate` for an unreadable bound and
    /// `ReportError::InvalidDateRange` if start is after end.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, ReportError> {
        Self::new(parse_bound(start)?, parse_bound(end)?)
    }

    /// First day in range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day in range (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// True if a start bound was given.
    #[must_use]
    pub const fn has_start(&self) -> bool {
        self.has_start
    }

    /// True if an end bound was given.
    #[must_use]
    pub const fn has_end(&self) -> bool {
        self.has_end
    }

    /// Period mode if either bound was given, "as of" otherwise.
    #[must_use]
    pub const fn mode(&self) -> ReportMode {
        if self.has_start || self.has_end {
            ReportMode::Period
        } else {
            ReportMode::AsOf
        }
    }

    /// Returns true if the date falls within `[start, end]`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::all()
    }
}

fn parse_bound(value: Option<&str>) -> Result<Option<NaiveDate>, ReportError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => normalize_date(v)
            .map(Some)
            .ok_or_else(|| ReportError::InvalidDate(v.to_string())),
    }
}
