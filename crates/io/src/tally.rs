//! Per-day tally of observation records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use selene_calendar::CalendarDate;
use selene_lunar::DailyObservation;
use tracing::debug;

use crate::export::ObservationRecord;

/// Counts the records of `taxon_id` observed on each day of `year`.
///
/// Each matching record adds one to its `observed_on` day. Records of other
/// taxa, without a date, with an unparsable date, or dated outside `year`
/// are skipped. The result holds one entry per observed day, sorted by date.
pub fn tally_daily<'a, I>(records: I, taxon_id: u64, year: i32) -> Vec<DailyObservation>
where
    I: IntoIterator<Item = &'a ObservationRecord>,
{
    let mut per_day: BTreeMap<CalendarDate, i64> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        if !record.belongs_to(taxon_id) {
            continue;
        }
        let Some(raw) = record.observed_on.as_deref() else {
            skipped += 1;
            continue;
        };
        match parse_observed_on(raw) {
            Some(date) if date.year() == year => *per_day.entry(date).or_insert(0) += 1,
            Some(date) => {
                debug!(%date, year, "skipping observation outside requested year");
                skipped += 1;
            }
            None => {
                debug!(observed_on = raw, "skipping observation with unparsable date");
                skipped += 1;
            }
        }
    }

    debug!(days = per_day.len(), skipped, "tallied daily observations");
    per_day
        .into_iter()
        .map(|(date, count)| DailyObservation::new(date, count))
        .collect()
}

/// Parses an iNaturalist `observed_on` value (`YYYY-MM-DD`).
pub(crate) fn parse_observed_on(raw: &str) -> Option<CalendarDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .map(CalendarDate::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::TaxonRecord;

    fn record(observed_on: Option<&str>, taxon_id: u64, ancestors: &[u64]) -> ObservationRecord {
        ObservationRecord {
            observed_on: observed_on.map(str::to_string),
            taxon: Some(TaxonRecord {
                id: taxon_id,
                name: format!("taxon {taxon_id}"),
                ancestor_ids: ancestors.to_vec(),
            }),
        }
    }

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn parse_valid_dates() {
        assert_eq!(parse_observed_on("2023-05-04"), Some(date(2023, 5, 4)));
        assert_eq!(parse_observed_on(" 2024-02-29 "), Some(date(2024, 2, 29)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_observed_on("2023-02-29"), None);
        assert_eq!(parse_observed_on("yesterday"), None);
        assert_eq!(parse_observed_on(""), None);
    }

    #[test]
    fn counts_records_per_day() {
        let records = vec![
            record(Some("2023-05-04"), 7, &[]),
            record(Some("2023-05-04"), 7, &[]),
            record(Some("2023-01-02"), 7, &[]),
        ];
        let daily = tally_daily(&records, 7, 2023);
        assert_eq!(
            daily,
            vec![
                DailyObservation::new(date(2023, 1, 2), 1),
                DailyObservation::new(date(2023, 5, 4), 2),
            ]
        );
    }

    #[test]
    fn includes_descendant_taxa() {
        let records = vec![
            record(Some("2023-05-04"), 12727, &[1, 3]),
            record(Some("2023-05-04"), 3, &[1]),
            record(Some("2023-05-04"), 40151, &[1]),
        ];
        let daily = tally_daily(&records, 3, 2023);
        assert_eq!(daily, vec![DailyObservation::new(date(2023, 5, 4), 2)]);
    }

    #[test]
    fn skips_undated_and_out_of_year_records() {
        let records = vec![
            record(None, 7, &[]),
            record(Some("2022-12-31"), 7, &[]),
            record(Some("not a date"), 7, &[]),
            record(Some("2023-12-31"), 7, &[]),
        ];
        let daily = tally_daily(&records, 7, 2023);
        assert_eq!(daily, vec![DailyObservation::new(date(2023, 12, 31), 1)]);
    }

    #[test]
    fn empty_input() {
        assert!(tally_daily(&Vec::<ObservationRecord>::new(), 7, 2023).is_empty());
    }
}
