//! Half-open time interval.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::UtcOffset;

/// A half-open interval `[start, end)` of UTC timestamps.
///
/// The start is included and the end is excluded. An interval whose end is
/// not after its start is empty; it is still a valid value and simply
/// matches nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Create an interval. No ordering between `start` and `end` is required.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The calendar month `month` of `year`, from local midnight on the first
    /// to local midnight on the first of the following month, in `offset`.
    ///
    /// Returns `None` if a boundary falls outside the range chrono can
    /// represent, or if `month` is not 1..=12.
    ///
    /// # Example
    ///
    /// ```
    /// use album_core::{Interval, UtcOffset};
    ///
    /// let december = Interval::month(2021, 12, UtcOffset::utc()).unwrap();
    /// assert_eq!(december.start().to_rfc3339(), "2021-12-01T00:00:00+00:00");
    /// assert_eq!(december.end().to_rfc3339(), "2022-01-01T00:00:00+00:00");
    /// ```
    pub fn month(year: i32, month: u32, offset: UtcOffset) -> Option<Self> {
        let start = local_midnight(year, month, offset)?;
        let end = if month == 12 {
            local_midnight(year.checked_add(1)?, 1, offset)?
        } else {
            local_midnight(year, month + 1, offset)?
        };
        Some(Self { start, end })
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether no timestamp can fall in this interval.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether `t` falls in `[start, end)`.
    pub fn contains(&self, t: &DateTime<Utc>) -> bool {
        self.start <= *t && *t < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.to_rfc3339(),
            self.end.to_rfc3339()
        )
    }
}

/// Midnight on the first day of `month` in `offset`, as UTC.
fn local_midnight(year: i32, month: u32, offset: UtcOffset) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(offset.fixed())
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}
