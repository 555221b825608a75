//! Concrete classification and aggregation scenarios.

use std::thread;

use selene_calendar::CalendarDate;
use selene_lunar::{
    DailyObservation, LunarError, LunarPhase, PhaseBoundaries, PhaseCalculator, PhaseConfig,
    PhaseTotals, aggregate, phase_calendar, phase_of,
};

fn date(y: i32, m: u8, d: u8) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

#[test]
fn reference_new_moon_day_is_new_moon() {
    assert_eq!(phase_of(date(2000, 1, 6)), LunarPhase::NewMoon);
}

#[test]
fn half_cycle_later_is_full_moon() {
    assert_eq!(phase_of(date(2000, 1, 21)), LunarPhase::FullMoon);
}

#[test]
fn two_new_moon_days_sum_into_new_moon() {
    let observations = [
        DailyObservation::new(date(2000, 1, 6), 5),
        DailyObservation::new(date(2000, 1, 7), 3),
    ];
    let totals = aggregate(&observations).unwrap();
    let expected: Vec<_> = LunarPhase::ALL
        .iter()
        .map(|&p| (p, if p == LunarPhase::NewMoon { 8 } else { 0 }))
        .collect();
    assert_eq!(totals.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn empty_sequence_yields_eight_zero_phases() {
    let totals = aggregate(&[]).unwrap();
    assert_eq!(totals.iter().count(), 8);
    assert_eq!(totals, PhaseTotals::new());
}

#[test]
fn count_of_minus_one_is_invalid_input() {
    let result = aggregate(&[DailyObservation::new(date(2023, 6, 1), -1)]);
    assert!(matches!(
        result,
        Err(LunarError::InvalidInput { count: -1, .. })
    ));
}

#[test]
fn recent_full_moons() {
    // Full moons of 2024 (UTC): Jan 25, Jun 22, Dec 15.
    for d in [date(2024, 1, 25), date(2024, 6, 22), date(2024, 12, 15)] {
        assert_eq!(phase_of(d), LunarPhase::FullMoon, "{d}");
    }
}

#[test]
fn recent_new_moons() {
    // New moons of 2024 (UTC): Jan 11, Apr 8, Oct 2.
    for d in [date(2024, 1, 11), date(2024, 4, 8), date(2024, 10, 2)] {
        assert_eq!(phase_of(d), LunarPhase::NewMoon, "{d}");
    }
}

#[test]
fn custom_calculator_aggregates_with_its_own_boundaries() {
    let calc = PhaseCalculator::new(
        PhaseConfig::default().with_boundaries(PhaseBoundaries::Leading),
    )
    .unwrap();
    let totals = calc
        .aggregate(&[DailyObservation::new(date(2000, 1, 6), 4)])
        .unwrap();
    assert_eq!(totals[LunarPhase::WaningCrescent], 4);
}

#[test]
fn phase_calendar_is_in_date_order() {
    let cal = phase_calendar(2023);
    assert_eq!(cal.len(), 365);
    assert!(cal.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn safe_to_share_across_threads() {
    fn assert_impl<T: Send + Sync>() {}
    assert_impl::<PhaseCalculator>();
    assert_impl::<PhaseTotals>();
    assert_impl::<DailyObservation>();

    let observations: Vec<_> = selene_calendar::year_sequence(2023)
        .into_iter()
        .map(|d| DailyObservation::new(d, 1))
        .collect();
    let expected = aggregate(&observations).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let observations = observations.clone();
            thread::spawn(move || aggregate(&observations).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
