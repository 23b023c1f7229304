//! Calendar date spans.
//!
//! Two conventions are used, each in exactly one type:
//! - [`DateRange`]: closed `[start, end]`, used for volume windows
//!   (a "week" includes both its first and last day).
//! - [`RotationWindow`]: half-open `[start, end)`, used for rotation cycles.
//!   [`RotationWindow::last_day`] gives the inclusive end for display.

use serde::{Deserialize, Serialize};

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A closed calendar span `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range. `start > end` yields an empty range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The 7-day week containing `date`, beginning on `week_start`.
    ///
    /// Weeks that would cross chrono's supported range are clamped at
    /// `NaiveDate::MIN` / `NaiveDate::MAX`, so the result still contains
    /// `date` but may cover fewer than 7 days.
    pub fn week_of(date: NaiveDate, week_start: Weekday) -> Self {
        let offset = (7 + date.weekday().num_days_from_monday()
            - week_start.num_days_from_monday())
            % 7;
        let start = date
            .checked_sub_signed(Duration::days(i64::from(offset)))
            .unwrap_or(NaiveDate::MIN);
        let end = start
            .checked_add_signed(Duration::days(6))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// The ISO week (Monday..Sunday) containing `date`.
    pub fn iso_week_of(date: NaiveDate) -> Self {
        Self::week_of(date, Weekday::Mon)
    }

    /// Moves the range by whole weeks (negative = earlier).
    ///
    /// Returns `None` if the result leaves chrono's supported date range.
    pub fn shift_weeks(&self, weeks: i64) -> Option<Self> {
        let delta = Duration::try_weeks(weeks)?;
        Some(Self {
            start: self.start.checked_add_signed(delta)?,
            end: self.end.checked_add_signed(delta)?,
        })
    }

    /// Whether `date` lies within the range (both ends inclusive).
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether the range covers no days.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days covered (0 if empty).
    pub fn days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }
}

/// The span `[start, end)` of one rotation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationWindow {
    /// First day of the cycle (inclusive).
    pub start: NaiveDate,
    /// First day of the next cycle (exclusive).
    pub end: NaiveDate,
    /// Cycle index relative to the starting date. Negative before the start.
    pub rotation_index: i64,
}

impl RotationWindow {
    /// Whether `date` falls inside this cycle.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Last day of the cycle (inclusive end).
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.end)
    }

    /// Cycle length in days.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// The cycle as a closed [`DateRange`].
    pub fn as_range(&self) -> DateRange {
        DateRange::new(self.start, self.last_day())
    }
}
