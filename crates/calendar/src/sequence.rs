//! Date sequence generation.

use crate::date::CalendarDate;
use crate::gregorian::days_in_year;

/// Generates up to `n_days` consecutive dates starting at `start`.
///
/// Month and year boundaries, including leap days, are handled by
/// [`CalendarDate::next`]. The sequence stops early at
/// [`CalendarDate::MAX`], so every returned date is distinct.
///
/// # Example
///
/// ```
/// use selene_calendar::{CalendarDate, date_sequence};
///
/// let start = CalendarDate::new(2000, 12, 30).unwrap();
/// let dates = date_sequence(start, 4);
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[2], CalendarDate::new(2001, 1, 1).unwrap());
/// ```
pub fn date_sequence(start: CalendarDate, n_days: usize) -> Vec<CalendarDate> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        let Some(next) = current.next() else {
            break;
        };
        dates.push(next);
        current = next;
    }
    dates
}

/// Returns every day of `year`, January 1 through December 31.
///
/// Days beyond the representable range are omitted, so a year outside it
/// yields an empty sequence.
pub fn year_sequence(year: i32) -> Vec<CalendarDate> {
    let Ok(jan1) = CalendarDate::new(year, 1, 1) else {
        return Vec::new();
    };
    date_sequence(jan1, days_in_year(year) as usize)
}
