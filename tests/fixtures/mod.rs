// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use month_calendar::models::category::Category;
use month_calendar::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    pub fn feb(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        feb(29)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn spanning(id: &str, start: NaiveDate, end: NaiveDate) -> Event {
        Event::builder()
            .id(id)
            .title(format!("Event {id}"))
            .dates(start, end)
            .build()
            .unwrap()
    }

    /// A(Jan 8-10), B(Jan 9), C(Jan 7-13): the classic three-lane week.
    pub fn three_lane_week() -> Vec<Event> {
        vec![
            spanning("A", dates::jan(8), dates::jan(10)),
            spanning("B", dates::jan(9), dates::jan(9)),
            spanning("C", dates::jan(7), dates::jan(13)),
        ]
    }

    /// Jan 30 - Feb 2, crossing the month boundary.
    pub fn month_crossing() -> Event {
        Event::builder()
            .id("cross")
            .title("Ski trip")
            .dates(dates::jan(30), dates::feb(2))
            .all_day(true)
            .category(Category::Vacation)
            .build()
            .unwrap()
    }
}
