//! Per-phase aggregation of daily observation counts.

use selene_calendar::CalendarDate;

use crate::calculator::PhaseCalculator;
use crate::error::LunarError;
use crate::totals::PhaseTotals;

/// Number of observations recorded on one calendar day.
///
/// The count is signed so that a negative value from a misbehaving source
/// can be reported by [`aggregate`] instead of silently wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DailyObservation {
    date: CalendarDate,
    count: i64,
}

impl DailyObservation {
    /// Creates an observation of `count` on `date`.
    pub fn new(date: CalendarDate, count: i64) -> Self {
        Self { date, count }
    }

    /// Returns the day of the observation.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the observation count.
    pub fn count(&self) -> i64 {
        self.count
    }
}

/// Sums observation counts per lunar phase using the default configuration.
///
/// Input order does not matter and the input may be empty, in which case
/// every phase is zero. Callers are responsible for passing observations
/// of a single year.
///
/// # Errors
///
/// Returns [`LunarError::InvalidInput`] if any count is negative.
///
/// # Example
///
/// ```
/// use selene_calendar::CalendarDate;
/// use selene_lunar::{DailyObservation, LunarError, aggregate};
///
/// let day = CalendarDate::new(2023, 3, 7).unwrap();
/// let err = aggregate(&[DailyObservation::new(day, -1)]).unwrap_err();
/// assert!(matches!(err, LunarError::InvalidInput { count: -1, .. }));
/// ```
pub fn aggregate(observations: &[DailyObservation]) -> Result<PhaseTotals, LunarError> {
    PhaseCalculator::default().aggregate(observations)
}
