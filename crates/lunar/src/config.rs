//! Configuration for lunar phase classification.

use crate::error::LunarError;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_853;

/// Reference new moon, 2000-01-06 18:14 UTC, in days since 1970-01-01.
pub const REFERENCE_NEW_MOON: f64 = 10_962.0 + (18.0 * 60.0 + 14.0) / 1440.0;

/// Where the eight equal-width phase buckets start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhaseBoundaries {
    /// Each bucket is centred on its canonical angle, so New Moon spans
    /// 1/16 of the cycle on either side of the reference new moon.
    #[default]
    Centered,
    /// Buckets start at the canonical angle: New Moon covers the first
    /// eighth of the cycle after the new moon.
    Leading,
}

/// Parameters of the phase calculation.
///
/// # Example
///
/// ```
/// use selene_lunar::{PhaseBoundaries, PhaseConfig};
///
/// let config = PhaseConfig::default()
///     .with_synodic_month(29.53)
///     .with_boundaries(PhaseBoundaries::Leading);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseConfig {
    /// Reference new moon in (fractional) days since 1970-01-01 UTC.
    epoch: f64,
    /// Length of one synodic month in days.
    synodic_month: f64,
    /// Bucket alignment.
    boundaries: PhaseBoundaries,
}

impl PhaseConfig {
    /// Sets the reference new moon, in days since 1970-01-01 UTC.
    pub fn with_epoch(mut self, epoch: f64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Sets the synodic month length in days.
    pub fn with_synodic_month(mut self, synodic_month: f64) -> Self {
        self.synodic_month = synodic_month;
        self
    }

    /// Sets the bucket alignment.
    pub fn with_boundaries(mut self, boundaries: PhaseBoundaries) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Returns the reference new moon in days since 1970-01-01 UTC.
    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    /// Returns the synodic month length in days.
    pub fn synodic_month(&self) -> f64 {
        self.synodic_month
    }

    /// Returns the bucket alignment.
    pub fn boundaries(&self) -> PhaseBoundaries {
        self.boundaries
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the epoch is non-finite or the synodic month is
    /// non-finite / non-positive.
    pub fn validate(&self) -> Result<(), LunarError> {
        if !self.epoch.is_finite() {
            return Err(LunarError::InvalidConfig {
                reason: format!("epoch must be finite, got {}", self.epoch),
            });
        }
        if !self.synodic_month.is_finite() || self.synodic_month <= 0.0 {
            return Err(LunarError::InvalidConfig {
                reason: format!(
                    "synodic month must be finite and positive, got {}",
                    self.synodic_month
                ),
            });
        }
        Ok(())
    }
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            epoch: REFERENCE_NEW_MOON,
            synodic_month: SYNODIC_MONTH,
            boundaries: PhaseBoundaries::Centered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_defaults() {
        let cfg = PhaseConfig::default();
        assert_abs_diff_eq!(cfg.synodic_month(), 29.530588853, epsilon = 1e-12);
        assert_abs_diff_eq!(cfg.epoch(), 10_962.759_722, epsilon = 1e-6);
        assert_eq!(cfg.boundaries(), PhaseBoundaries::Centered);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let cfg = PhaseConfig::default()
            .with_epoch(0.5)
            .with_synodic_month(30.0)
            .with_boundaries(PhaseBoundaries::Leading);
        assert_abs_diff_eq!(cfg.epoch(), 0.5);
        assert_abs_diff_eq!(cfg.synodic_month(), 30.0);
        assert_eq!(cfg.boundaries(), PhaseBoundaries::Leading);
    }

    #[test]
    fn test_validate_synodic_month() {
        for bad in [0.0, -29.5, f64::NAN, f64::INFINITY] {
            let cfg = PhaseConfig::default().with_synodic_month(bad);
            assert!(
                matches!(cfg.validate(), Err(LunarError::InvalidConfig { .. })),
                "expected rejection of {bad}"
            );
        }
    }

    #[test]
    fn test_validate_epoch() {
        let cfg = PhaseConfig::default().with_epoch(f64::NAN);
        let err = cfg.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid phase configuration: epoch must be finite, got NaN"
        );
    }
}
