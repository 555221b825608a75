//! Gregorian calendar date.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::gregorian::days_in_month;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A day in the proleptic Gregorian calendar.
///
/// Backed by [`chrono::NaiveDate`], so the representable range is chrono's
/// (roughly ±262 000 years). Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// The earliest representable date.
    pub const MIN: Self = Self(NaiveDate::MIN);

    /// The latest representable date.
    pub const MAX: Self = Self(NaiveDate::MAX);

    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// `year` is an astronomical year number (1 BC is `0`).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month is outside 1..=12, the day
    /// does not exist in that month of that year, or the year is outside
    /// the representable range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month).ok_or(CalendarError::InvalidMonth { month })?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(CalendarError::YearOutOfRange { year })
    }

    /// Creates a `CalendarDate` from a day number counted from 1970-01-01.
    ///
    /// Returns `None` if the day number falls outside the representable range.
    pub fn from_days_since_unix_epoch(days: i64) -> Option<Self> {
        let days_from_ce = days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?;
        let days_from_ce = i32::try_from(days_from_ce).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days_from_ce).map(Self)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the day of the year, 1 for January 1.
    pub fn ordinal(self) -> u16 {
        self.0.ordinal() as u16
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    pub fn days_since_unix_epoch(self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
    }

    /// Returns the next calendar day, or `None` after [`CalendarDate::MAX`].
    ///
    /// December 31 wraps to January 1 of the following year.
    pub fn next(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    /// Formats as ISO 8601 (`YYYY-MM-DD`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}
