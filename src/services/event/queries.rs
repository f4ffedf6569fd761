use super::EventStore;
use crate::models::event::Event;
use crate::utils::date::is_same_month;
use chrono::NaiveDate;

impl EventStore {
    /// Events whose normalized `[start, end]` range contains `day`.
    pub fn query_by_day(&self, day: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.covers(day)).collect()
    }

    /// Events whose start day falls in the month of `month`.
    ///
    /// Anchored on the start only: an event that began in the previous month
    /// and runs into this one is not returned here, though
    /// [`EventStore::query_by_day`] still finds it.
    pub fn query_by_month(&self, month: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| is_same_month(event.start_day(), month))
            .collect()
    }

    /// Events intersecting `[first, last]`, in storage order.
    pub fn events_in_range(&self, first: NaiveDate, last: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.overlaps(first, last))
            .collect()
    }

    /// Events starting in `month`, ordered by start for the monthly list.
    pub fn month_agenda(&self, month: NaiveDate) -> Vec<&Event> {
        let mut events = self.query_by_month(month);
        events.sort_by_key(|event| event.start);
        events
    }

    /// List every event ordered by start.
    pub fn list_all(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by_key(|event| event.start);
        events
    }
}
