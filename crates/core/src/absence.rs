//! Calendar-day filtering for the big-screen absence view.
//!
//! The dashboard shows only today's absences. `absence_date` is a plain
//! calendar date, so the comparison is done against the viewer's local
//! calendar day, handed in by the caller. Comparing `NaiveDate`s keeps the
//! result independent of whatever UTC offset the server happens to run in.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// The calendar day at the given local instant.
pub fn local_day(now: DateTime<FixedOffset>) -> NaiveDate {
    now.date_naive()
}

/// Whether an absence dated `absence_date` belongs on the view for `day`.
pub fn is_on_day(absence_date: NaiveDate, day: NaiveDate) -> bool {
    absence_date == day
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date literal")
    }

    #[test]
    fn same_day_filter_matches_only_the_reference_day() {
        let day = date("2024-03-01");
        assert!(is_on_day(date("2024-03-01"), day));
        assert!(!is_on_day(date("2024-03-02"), day));
        assert!(!is_on_day(date("2024-02-29"), day));
    }

    #[test]
    fn late_evening_local_time_stays_on_the_local_day() {
        // 23:00 on March 1st in UTC-8 is already March 2nd in UTC. The
        // filter must still treat it as March 1st.
        let now: DateTime<FixedOffset> = "2024-03-01T23:00:00-08:00".parse().unwrap();
        let day = local_day(now);

        assert_eq!(day, date("2024-03-01"));
        assert!(is_on_day(date("2024-03-01"), day));
        assert!(!is_on_day(date("2024-03-02"), day));
    }

    #[test]
    fn utc_offset_does_not_change_the_selected_day() {
        for raw in [
            "2024-03-01T23:00:00+00:00",
            "2024-03-01T23:00:00-08:00",
            "2024-03-01T23:00:00+11:00",
        ] {
            let now: DateTime<FixedOffset> = raw.parse().unwrap();
            assert_eq!(local_day(now), date("2024-03-01"), "offset case: {raw}");
        }
    }
}
