//! Period selection domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A user-selectable time window, as a closed variant set.
///
/// The resolver matches this exhaustively; adding a variant without handling
/// it is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PeriodSpec {
    /// The current local calendar day.
    Today,
    /// The last `days` local calendar days, today included.
    LastNDays { days: u32 },
    /// The local calendar month containing the reference instant.
    CurrentMonth,
    /// Inclusive calendar-date interval. Build through
    /// [`PeriodSpec::custom`] to get the ordering checked up front.
    Custom { start: NaiveDate, end: NaiveDate },
}

impl PeriodSpec {
    /// Checked constructor for a custom period.
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(PeriodSpec::Custom { start, end })
    }

    /// Window covering the last `days` calendar days, today included.
    pub fn last_n_days(days: u32) -> Self {
        PeriodSpec::LastNDays { days }
    }
}

/// A period resolved against a reference instant: a half-open instant
/// interval plus the inclusive local calendar dates it spans.
///
/// Both instants sit on local midnight boundaries, so the interval always
/// covers whole local days and `start < end` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRange {
    pub start: DateTime<Utc>,
    /// Exclusive upper bound.
    pub end: DateTime<Utc>,
    /// First local calendar day covered by the range.
    pub start_date: NaiveDate,
    /// Last local calendar day covered by the range, inclusive.
    pub end_date: NaiveDate,
}

impl ResolvedRange {
    /// Half-open inclusion test: `start <= instant < end`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}
