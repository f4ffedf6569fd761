//! Drag-and-drop relocation of events between day cells.

use chrono::NaiveDate;

use crate::models::event::{Event, EventId};
use crate::services::event::EventStore;
use crate::utils::date::days_between;

/// Move an event so it starts on `target_day`, keeping its duration.
///
/// Both ends shift by the same number of days (time-of-day is kept). A
/// missing id is not an error: the event may have been deleted while it was
/// being dragged. Returns the stored event after the move, if any.
pub fn relocate(store: &mut EventStore, id: &EventId, target_day: NaiveDate) -> Option<Event> {
    let Some(current) = store.get(id) else {
        log::debug!("Drop on {} ignored, event {} no longer exists", target_day, id);
        return None;
    };

    let delta = days_between(current.start_day(), target_day);
    if delta == 0 {
        return Some(current.clone());
    }

    let Some(moved) = current.shifted_by_days(delta) else {
        log::warn!(
            "Drop on {} ignored, moving event {} by {} day(s) leaves the supported date range",
            target_day,
            id,
            delta
        );
        return None;
    };
    if let Err(err) = store.update(moved.clone()) {
        log::debug!("Drop on {} ignored: {}", target_day, err);
        return None;
    }
    log::debug!("Moved event {} by {} day(s) to {}", id, delta, target_day);
    Some(moved)
}

/// State of an in-progress drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragContext {
    pub event_id: EventId,
    pub original_start: NaiveDate,
    pub original_end: NaiveDate,
    pub duration_days: i64,
    pub hovered_date: Option<NaiveDate>,
}

impl DragContext {
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: event.id.clone(),
            original_start: event.start_day(),
            original_end: event.end_day(),
            duration_days: event.duration_days(),
            hovered_date: Some(event.start_day()),
        }
    }

    pub fn update_hover(&mut self, date: NaiveDate) {
        self.hovered_date = Some(date);
    }

    /// Pointer left the grid; a drop now does nothing.
    pub fn clear_hover(&mut self) {
        self.hovered_date = None;
    }

    /// Day shift a drop at the current hover position would apply.
    pub fn hovered_shift(&self) -> Option<i64> {
        self.hovered_date
            .map(|date| days_between(self.original_start, date))
    }

    /// Preview of the dropped range, for highlighting cells while dragging.
    pub fn hovered_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let date = self.hovered_date?;
        let end = date.checked_add_signed(chrono::Duration::days(self.duration_days))?;
        Some((date, end))
    }

    /// Drop at the hovered day and write the move through the store.
    pub fn finish(self, store: &mut EventStore) -> Option<Event> {
        let target = self.hovered_date?;
        relocate(store, &self.event_id, target)
    }
}
