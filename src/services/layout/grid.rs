//! Date grid for the month view.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::utils::date::{first_of_month, get_week_end, get_week_start, last_of_month};

pub const DAYS_PER_WEEK: usize = 7;

/// Seven consecutive calendar days aligned to the first day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekRow {
    days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekRow {
    /// Row of seven days beginning at `start`.
    /// Seven consecutive days from `start`. A row that would run past
    /// chrono's last date is shifted back to end on it.
    pub fn starting(start: NaiveDate) -> Self {
        let span = Duration::days((DAYS_PER_WEEK - 1) as i64);
        let start = match start.checked_add_signed(span) {
            Some(_) => start,
            None => NaiveDate::MAX - span,
        };
        Self {
            days: std::array::from_fn(|i| start + Duration::days(i as i64)),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn end(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    pub fn days(&self) -> &[NaiveDate; DAYS_PER_WEEK] {
        &self.days
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start() <= day && day <= self.end()
    }

    /// Column index (0-6) of `day` within the row.
    pub fn index_of(&self, day: NaiveDate) -> Option<usize> {
        self.days.iter().position(|candidate| *candidate == day)
    }
}

/// Every day shown for the month containing `reference`, padded with days of
/// the neighbouring months so the length is a multiple of seven (except in
/// the last month chrono can represent, where padding stops at its end).
pub fn month_days(reference: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let first = get_week_start(first_of_month(reference), first_day_of_week);
    let last = get_week_end(last_of_month(reference), first_day_of_week);
    first.iter_days().take_while(|day| *day <= last).collect()
}

/// Week rows for the month containing `reference`, weeks starting on Sunday.
pub fn build_week_rows(reference: NaiveDate) -> Vec<WeekRow> {
    build_week_rows_from(reference, 0)
}

/// Week rows for the month containing `reference`.
///
/// `first_day_of_week` follows the settings convention (0 = Sunday).
pub fn build_week_rows_from(reference: NaiveDate, first_day_of_week: u8) -> Vec<WeekRow> {
    month_days(reference, first_day_of_week)
        .chunks_exact(DAYS_PER_WEEK)
        .map(|chunk| WeekRow::starting(chunk[0]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};
    use test_case::test_case;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_january_2024_grid() {
        let rows = build_week_rows(d(2024, 1, 17));
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].start(), d(2023, 12, 31));
        assert_eq!(rows[1].start(), d(2024, 1, 7));
        assert_eq!(rows[1].end(), d(2024, 1, 13));
        assert_eq!(rows[4].end(), d(2024, 2, 3));
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_days() {
        // September 2024 starts on a Sunday.
        let days = month_days(d(2024, 9, 1), 0);
        assert_eq!(days[0], d(2024, 9, 1));
        assert_eq!(*days.last().unwrap(), d(2024, 10, 5));
    }

    #[test]
    fn test_february_2015_fits_four_rows() {
        // Feb 2015: 28 days starting on a Sunday.
        assert_eq!(build_week_rows(d(2015, 2, 10)).len(), 4);
    }

    #[test]
    fn test_six_row_month() {
        // June 2024 starts on a Saturday and has 30 days.
        assert_eq!(build_week_rows(d(2024, 6, 1)).len(), 6);
    }

    #[test]
    fn test_last_representable_month_does_not_overflow() {
        let rows = build_week_rows(NaiveDate::MAX);
        assert!(!rows.is_empty());
        assert_eq!(rows[0].start(), get_week_start(first_of_month(NaiveDate::MAX), 0));
        for row in &rows {
            assert_eq!(row.end() - row.start(), Duration::days(6));
        }

        let clamped = WeekRow::starting(NaiveDate::MAX);
        assert_eq!(clamped.end(), NaiveDate::MAX);
    }

    #[test]
    fn test_monday_first_rows() {
        let rows = build_week_rows_from(d(2024, 1, 1), 1);
        assert_eq!(rows[0].start(), d(2024, 1, 1));
        assert_eq!(rows[0].start().weekday(), Weekday::Mon);
        assert_eq!(rows.last().unwrap().end(), d(2024, 2, 4));
    }

    #[test_case(2024, 1 ; "january")]
    #[test_case(2024, 2 ; "leap february")]
    #[test_case(2023, 2 ; "february")]
    #[test_case(2024, 12 ; "december")]
    #[test_case(2026, 8 ; "august")]
    fn test_rows_cover_month_contiguously(year: i32, month: u32) {
        let reference = d(year, month, 1);
        let rows = build_week_rows(reference);
        let days: Vec<NaiveDate> = rows.iter().flat_map(|row| *row.days()).collect();

        assert_eq!(days.len() % 7, 0);
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert!(days.contains(&first_of_month(reference)));
        assert!(days.contains(&last_of_month(reference)));
        assert!(rows.iter().all(|row| row.start().weekday() == Weekday::Sun));
    }

    #[test]
    fn test_week_row_lookup() {
        let row = WeekRow::starting(d(2024, 1, 7));
        assert!(row.contains(d(2024, 1, 13)));
        assert!(!row.contains(d(2024, 1, 14)));
        assert_eq!(row.index_of(d(2024, 1, 9)), Some(2));
        assert_eq!(row.index_of(d(2024, 1, 6)), None);
    }
}
