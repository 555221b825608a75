//! Error types for the selene-calendar crate.

/// Error type for all fallible operations in the selene-calendar crate.
///
/// Covers validation failures for month numbers, day-within-month values
/// and years beyond the supported range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year:04}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year of the month; decides February's length.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a year lies outside the representable date range.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            year: 2023,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for 2023-02 (max 28)");
    }

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange { year: 300_000 };
        assert_eq!(err.to_string(), "year out of range: 300000");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
