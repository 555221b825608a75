//! Leap-year rules and month lengths for the proleptic Gregorian calendar.

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a leap year in the Gregorian calendar.
///
/// `year` is an astronomical year number (1 BC is `0`).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in `month` of `year`, or `None` if the month
/// is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        2 if is_leap_year(year) => Some(29),
        1..=12 => Some(DAYS_PER_MONTH[month as usize]),
        _ => None,
    }
}
