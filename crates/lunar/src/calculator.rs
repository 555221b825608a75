//! Mapping of calendar days onto the synodic cycle.

use selene_calendar::{CalendarDate, year_sequence};

use crate::aggregate::DailyObservation;
use crate::config::{PhaseBoundaries, PhaseConfig};
use crate::error::LunarError;
use crate::phase::LunarPhase;
use crate::totals::PhaseTotals;

/// Stateless phase classifier carrying a validated [`PhaseConfig`].
///
/// The free functions [`phase_of`], [`phase_at`], [`aggregate`](crate::aggregate()),
/// [`phase_calendar`] and [`days_per_phase`] use `PhaseCalculator::default()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseCalculator {
    config: PhaseConfig,
}

impl PhaseCalculator {
    /// Creates a calculator from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::InvalidConfig`] if the configuration fails
    /// [`PhaseConfig::validate`].
    pub fn new(config: PhaseConfig) -> Result<Self, LunarError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &PhaseConfig {
        &self.config
    }

    /// Age of the moon in days at `days` since 1970-01-01 UTC, in
    /// `[0, synodic_month)`.
    ///
    /// The remainder is Euclidean, so instants before the epoch still map
    /// into the cycle.
    pub fn moon_age(&self, days: f64) -> f64 {
        let synodic = self.config.synodic_month();
        let age = (days - self.config.epoch()).rem_euclid(synodic);
        // rem_euclid can round up to exactly `synodic` for tiny negative inputs
        if age < synodic { age } else { 0.0 }
    }

    /// Progress through the cycle at `days` since 1970-01-01 UTC, in `[0, 1)`.
    pub fn cycle_fraction(&self, days: f64) -> f64 {
        let fraction = self.moon_age(days) / self.config.synodic_month();
        if fraction < 1.0 { fraction } else { 0.0 }
    }

    /// Classifies the instant `days` since 1970-01-01 UTC.
    ///
    /// Total: a non-finite input lands in the New Moon bucket.
    pub fn phase_at(&self, days: f64) -> LunarPhase {
        let scaled = self.cycle_fraction(days) * LunarPhase::COUNT as f64;
        let bucket = match self.config.boundaries() {
            PhaseBoundaries::Centered => (scaled + 0.5).floor(),
            PhaseBoundaries::Leading => scaled.floor(),
        };
        LunarPhase::from_index(bucket as usize)
    }

    /// Classifies a calendar day, sampled at 00:00 UTC.
    pub fn phase_of(&self, date: CalendarDate) -> LunarPhase {
        self.phase_at(date.days_since_unix_epoch() as f64)
    }

    /// Returns every day of `year` paired with its phase.
    pub fn phase_calendar(&self, year: i32) -> Vec<(CalendarDate, LunarPhase)> {
        year_sequence(year)
            .into_iter()
            .map(|date| (date, self.phase_of(date)))
            .collect()
    }

    /// Counts how many days of `year` fall in each phase.
    pub fn days_per_phase(&self, year: i32) -> PhaseTotals {
        let mut totals = PhaseTotals::new();
        for date in year_sequence(year) {
            totals.increment(self.phase_of(date));
        }
        totals
    }

    /// Sums observation counts per phase.
    ///
    /// All counts are validated before any is added, so an invalid input
    /// never yields a partial result.
    ///
    /// # Errors
    ///
    /// - [`LunarError::InvalidInput`] if any count is negative.
    /// - [`LunarError::Overflow`] if a total exceeds `u64::MAX`.
    #[tracing::instrument(skip_all, fields(n_observations = observations.len()))]
    pub fn aggregate(&self, observations: &[DailyObservation]) -> Result<PhaseTotals, LunarError> {
        if let Some(bad) = observations.iter().find(|obs| obs.count() < 0) {
            return Err(LunarError::InvalidInput {
                date: bad.date(),
                count: bad.count(),
            });
        }

        let mut totals = PhaseTotals::new();
        for obs in observations {
            let phase = self.phase_of(obs.date());
            totals
                .add(phase, obs.count().unsigned_abs())
                .ok_or(LunarError::Overflow { date: obs.date() })?;
        }
        tracing::debug!(total = totals.total(), "aggregated observations by phase");
        Ok(totals)
    }
}

/// Classifies a calendar day with the default configuration.
pub fn phase_of(date: CalendarDate) -> LunarPhase {
    PhaseCalculator::default().phase_of(date)
}

/// Classifies an instant (days since 1970-01-01 UTC) with the default configuration.
pub fn phase_at(days: f64) -> LunarPhase {
    PhaseCalculator::default().phase_at(days)
}

/// Every day of `year` with its phase, using the default configuration.
pub fn phase_calendar(year: i32) -> Vec<(CalendarDate, LunarPhase)> {
    PhaseCalculator::default().phase_calendar(year)
}

/// Days of `year` per phase, using the default configuration.
pub fn days_per_phase(year: i32) -> PhaseTotals {
    PhaseCalculator::default().days_per_phase(year)
}
