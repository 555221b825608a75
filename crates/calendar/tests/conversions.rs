use selene_calendar::{CalendarDate, CalendarError, days_in_month, days_in_year, year_sequence};

#[test]
fn day_number_roundtrip_full_leap_year() {
    for date in year_sequence(2024) {
        let days = date.days_since_unix_epoch();
        assert_eq!(
            CalendarDate::from_days_since_unix_epoch(days),
            Some(date),
            "roundtrip failed for {date}"
        );
    }
}

#[test]
fn day_numbers_are_contiguous_across_years() {
    let last_1999 = CalendarDate::new(1999, 12, 31).unwrap();
    let first_2000 = CalendarDate::new(2000, 1, 1).unwrap();
    assert_eq!(
        first_2000.days_since_unix_epoch() - last_1999.days_since_unix_epoch(),
        1
    );
}

#[test]
fn ordinal_matches_sequence_position() {
    for (i, date) in year_sequence(2023).into_iter().enumerate() {
        assert_eq!(date.ordinal() as usize, i + 1, "ordinal mismatch for {date}");
    }
}

#[test]
fn month_lengths_sum_to_year_length() {
    for year in [1900, 2000, 2023, 2024] {
        let total: u16 = (1..=12)
            .map(|m| u16::from(days_in_month(year, m).unwrap()))
            .sum();
        assert_eq!(total, days_in_year(year), "year {year}");
    }
}

#[test]
fn every_month_rejects_day_past_end() {
    for month in 1..=12u8 {
        let max_day = days_in_month(2023, month).unwrap();
        assert!(CalendarDate::new(2023, month, max_day).is_ok());
        assert_eq!(
            CalendarDate::new(2023, month, max_day + 1).unwrap_err(),
            CalendarError::InvalidDay {
                day: max_day + 1,
                month,
                year: 2023,
                max_day,
            }
        );
    }
}

#[test]
fn gregorian_century_rule() {
    assert!(CalendarDate::new(1900, 2, 29).is_err());
    assert!(CalendarDate::new(2000, 2, 29).is_ok());
}

#[test]
fn extreme_day_numbers_are_rejected() {
    for days in [i64::MAX, i64::MIN, i64::from(i32::MAX), i64::from(i32::MIN)] {
        assert_eq!(CalendarDate::from_days_since_unix_epoch(days), None, "{days}");
    }
}
