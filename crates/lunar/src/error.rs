//! Error types for the selene-lunar crate.

use selene_calendar::CalendarDate;

/// Error type for all fallible operations in the selene-lunar crate.
///
/// Phase classification itself never fails; errors come from invalid
/// observation data handed to the aggregator or from an invalid
/// [`PhaseConfig`](crate::PhaseConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LunarError {
    /// Returned when an observation carries a negative count.
    #[error("invalid input: negative observation count {count} on {date}")]
    InvalidInput {
        /// Date of the offending observation.
        date: CalendarDate,
        /// The negative count.
        count: i64,
    },

    /// Returned when a running total no longer fits in a `u64`.
    #[error("observation total overflowed while adding {date}")]
    Overflow {
        /// Date of the observation whose count overflowed the total.
        date: CalendarDate,
    },

    /// Returned when a phase configuration value is unusable.
    #[error("invalid phase configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> CalendarDate {
        CalendarDate::new(2023, 5, 4).unwrap()
    }

    #[test]
    fn error_invalid_input() {
        let e = LunarError::InvalidInput {
            date: date(),
            count: -1,
        };
        assert_eq!(
            e.to_string(),
            "invalid input: negative observation count -1 on 2023-05-04"
        );
    }

    #[test]
    fn error_overflow() {
        let e = LunarError::Overflow { date: date() };
        assert_eq!(
            e.to_string(),
            "observation total overflowed while adding 2023-05-04"
        );
    }

    #[test]
    fn error_invalid_config() {
        let e = LunarError::InvalidConfig {
            reason: "synodic month must be positive".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid phase configuration: synodic month must be positive"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<LunarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<LunarError>();
    }
}
