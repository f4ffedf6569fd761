//! Displayed-month selection and navigation.

use chrono::{Datelike, NaiveDate};

use crate::models::settings::Settings;
use crate::services::event::EventStore;
use crate::services::layout::{build_week_rows_from, layout_month, MonthLayout, WeekRow};
use crate::utils::date::{first_of_month, is_same_month, shift_months};

/// Which month is on screen and which day is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    current_month: NaiveDate,
    selected_date: NaiveDate,
    first_day_of_week: u8,
}

impl CalendarView {
    /// Show the month containing `today`, with `today` selected.
    pub fn new(today: NaiveDate, settings: &Settings) -> Self {
        Self {
            current_month: first_of_month(today),
            selected_date: today,
            first_day_of_week: settings.first_day_of_week,
        }
    }

    /// First day of the displayed month.
    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    pub fn next_month(&mut self) {
        self.navigate(1);
    }

    pub fn prev_month(&mut self) {
        self.navigate(-1);
    }

    /// Move the displayed month. The selection stays where it was, even
    /// when it is no longer on screen.
    fn navigate(&mut self, delta: i32) {
        match shift_months(self.current_month, delta) {
            Some(month) => self.current_month = month,
            None => log::warn!(
                "Cannot move {} month(s) from {}",
                delta,
                self.current_month
            ),
        }
    }

    /// Jump straight to the month containing `day`.
    pub fn show_month(&mut self, day: NaiveDate) {
        self.current_month = first_of_month(day);
    }

    /// Select a day. Picking a padding day from a neighbouring month
    /// highlights it without changing the displayed month.
    pub fn select_date(&mut self, day: NaiveDate) {
        self.selected_date = day;
    }

    /// Whether the selection is visible in the current month's grid.
    pub fn selection_in_view(&self) -> bool {
        self.week_rows()
            .iter()
            .any(|row| row.contains(self.selected_date))
    }

    pub fn is_in_current_month(&self, day: NaiveDate) -> bool {
        is_same_month(self.current_month, day)
    }

    pub fn week_rows(&self) -> Vec<WeekRow> {
        build_week_rows_from(self.current_month, self.first_day_of_week)
    }

    /// Fresh layout for the displayed month from the store's current events.
    pub fn layout(&self, store: &EventStore) -> MonthLayout {
        layout_month(self.current_month, self.first_day_of_week, store.events())
    }

    /// "January 2024"
    pub fn title(&self) -> String {
        format!(
            "{} {}",
            self.current_month.format("%B"),
            self.current_month.year()
        )
    }
}
