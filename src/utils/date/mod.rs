// Date utility functions
// Calendar-day helpers shared by the grid builder, store and packer.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Discard the time-of-day component.
pub fn normalize(moment: NaiveDateTime) -> NaiveDate {
    moment.date()
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Signed number of whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - (first_day_of_week % 7) as i64 + 7) % 7;
    date.checked_sub_signed(Duration::days(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// Last day of the week that starts on `first_day_of_week` and contains `date`.
///
/// Saturates at `NaiveDate::MAX` for the final partial week of chrono's range.
pub fn get_week_end(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    get_week_start(date, first_day_of_week)
        .checked_add_signed(Duration::days(6))
        .unwrap_or(NaiveDate::MAX)
}

/// Map the numeric setting (0 = Sunday) onto chrono's weekday.
pub fn weekday_from_index(first_day_of_week: u8) -> Weekday {
    match first_day_of_week % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Abbreviated weekday names starting from the configured first day.
pub fn weekday_names(first_day_of_week: u8) -> [&'static str; 7] {
    const ALL_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let start = (first_day_of_week % 7) as usize;
    std::array::from_fn(|i| ALL_DAYS[(start + i) % 7])
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .map(|next| next - Duration::days(1))
        .unwrap_or(NaiveDate::MAX)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    last_of_month(date).day()
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Move by whole months, clamping the day to the target month's length
/// (Jan 31 + 1 month = Feb 28/29).
pub fn shift_months(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Parse a "YYYY-MM" month reference into the first day of that month.
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.trim().split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Parse a display time such as "09:30" or "9:30".
pub fn parse_display_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Supported `date_format` settings and their chrono patterns.
const DATE_FORMATS: [(&str, &str); 4] = [
    ("YYYY-MM-DD", "%Y-%m-%d"),
    ("YYYY/MM/DD", "%Y/%m/%d"),
    ("DD/MM/YYYY", "%d/%m/%Y"),
    ("MM/DD/YYYY", "%m/%d/%Y"),
];

fn date_pattern(date_format: &str) -> Option<&'static str> {
    DATE_FORMATS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(date_format.trim()))
        .map(|(_, pattern)| *pattern)
}

pub fn is_supported_date_format(date_format: &str) -> bool {
    date_pattern(date_format).is_some()
}

/// Format a date per the `date_format` setting (e.g. "DD/MM/YYYY").
///
/// Unknown formats fall back to ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_pattern(date_format).unwrap_or("%Y-%m-%d"))
        .to_string()
}
