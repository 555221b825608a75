//! # selene-lunar
//!
//! Lunar phase classification of calendar days and per-phase aggregation of
//! daily observation counts.
//!
//! A day is classified by its position in the mean synodic month, measured
//! from a reference new moon (2000-01-06 18:14 UTC) and split into eight
//! buckets of equal angular width (45° each):
//!
//! | Index | Phase | Centre of bucket |
//! |-------|-------|------------------|
//! | 0 | New Moon | 0° |
//! | 1 | Waxing Crescent | 45° |
//! | 2 | First Quarter | 90° |
//! | 3 | Waxing Gibbous | 135° |
//! | 4 | Full Moon | 180° |
//! | 5 | Waning Gibbous | 225° |
//! | 6 | Last Quarter | 270° |
//! | 7 | Waning Crescent | 315° |
//!
//! # Quick start
//!
//! ```
//! use selene_calendar::CalendarDate;
//! use selene_lunar::{DailyObservation, LunarPhase, aggregate, phase_of};
//!
//! let new_moon = CalendarDate::new(2000, 1, 6).unwrap();
//! let full_moon = CalendarDate::new(2000, 1, 21).unwrap();
//! assert_eq!(phase_of(new_moon), LunarPhase::NewMoon);
//! assert_eq!(phase_of(full_moon), LunarPhase::FullMoon);
//!
//! let totals = aggregate(&[
//!     DailyObservation::new(new_moon, 5),
//!     DailyObservation::new(full_moon, 2),
//! ])
//! .unwrap();
//! assert_eq!(totals[LunarPhase::NewMoon], 5);
//! assert_eq!(totals.total(), 7);
//! ```
//!
//! # Architecture
//!
//! ```text
//! aggregate()
//!   ├─ PhaseCalculator::default()   (calculator.rs, config.rs)
//!   ├─ validate counts               (aggregate.rs)
//!   ├─ phase_of() per observation    (calculator.rs)
//!   └─ PhaseTotals::add()            (totals.rs)
//! ```
//!
//! Everything here is pure: no I/O and no shared state, so all functions may
//! be called from any thread.

pub mod aggregate;
pub mod calculator;
pub mod config;
pub mod error;
pub mod phase;
pub mod totals;

pub use aggregate::{DailyObservation, aggregate};
pub use calculator::{PhaseCalculator, days_per_phase, phase_at, phase_calendar, phase_of};
pub use config::{PhaseBoundaries, PhaseConfig, REFERENCE_NEW_MOON, SYNODIC_MONTH};
pub use error::LunarError;
pub use phase::LunarPhase;
pub use totals::PhaseTotals;
