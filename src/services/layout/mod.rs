//! Month layout: the date grid plus per-week lane packing.
//!
//! Nothing here is cached. Callers rebuild the layout after every store
//! mutation or month change; the cost is bounded by weeks x events.

use chrono::NaiveDate;
use serde::Serialize;

pub mod grid;
pub mod lanes;

pub use grid::{build_week_rows, build_week_rows_from, month_days, WeekRow, DAYS_PER_WEEK};
pub use lanes::{
    clipped_span, pack_week, DayLanes, LaneAssignment, LaneFragment, LaneSlot, WeekLayout,
};

use crate::models::event::Event;
use crate::utils::date::first_of_month;

/// Everything the month view needs to draw one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLayout {
    /// First day of the displayed month.
    pub month: NaiveDate,
    pub weeks: Vec<WeekLayout>,
}

impl MonthLayout {
    pub fn lane_count(&self) -> usize {
        self.weeks
            .iter()
            .map(WeekLayout::lane_count)
            .max()
            .unwrap_or(0)
    }

    /// Lanes of a specific day, if it is on the grid.
    pub fn day(&self, date: NaiveDate) -> Option<&DayLanes> {
        self.weeks
            .iter()
            .flat_map(|week| week.days.iter())
            .find(|day| day.date == date)
    }
}

/// Pack each of `rows` against the same event collection.
pub fn pack_rows(rows: &[WeekRow], events: &[Event]) -> Vec<WeekLayout> {
    rows.iter().map(|row| pack_week(row, events)).collect()
}

/// Build the grid for the month containing `reference` and pack every week.
pub fn layout_month(reference: NaiveDate, first_day_of_week: u8, events: &[Event]) -> MonthLayout {
    let rows = build_week_rows_from(reference, first_day_of_week);
    MonthLayout {
        month: first_of_month(reference),
        weeks: pack_rows(&rows, events),
    }
}
