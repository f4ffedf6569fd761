//! Week lane packing.
//!
//! Every event that touches a week row gets one horizontal lane across its
//! clipped span so that events sharing a day never share a lane. Events are
//! placed in order of start day, longer first on ties, each into the lowest
//! lane free on all of its days. The packing never backtracks, so a week
//! needs exactly as many lanes as its busiest day.

use serde::Serialize;

use super::grid::{WeekRow, DAYS_PER_WEEK};
use crate::models::event::{Event, EventId};
use crate::utils::date::days_between;

/// One event's piece of a day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneFragment {
    pub event_id: EventId,
    /// This day is the event's first day (rounded leading edge).
    pub is_start: bool,
    /// This day is the event's last day (rounded trailing edge).
    pub is_end: bool,
    /// First day of the event within this row, where the label is drawn.
    pub is_segment_start: bool,
}

/// A lane position in a day cell: a spacer or an event fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LaneSlot {
    Empty,
    Event(LaneFragment),
}

impl LaneSlot {
    pub fn fragment(&self) -> Option<&LaneFragment> {
        match self {
            LaneSlot::Empty => None,
            LaneSlot::Event(fragment) => Some(fragment),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LaneSlot::Empty)
    }
}

/// Lane slots of one day, lane 0 first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLanes {
    pub date: chrono::NaiveDate,
    pub slots: Vec<LaneSlot>,
}

impl DayLanes {
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &LaneFragment)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(lane, slot)| slot.fragment().map(|fragment| (lane, fragment)))
    }

    /// Events sitting in lanes at or beyond `visible_lanes`.
    pub fn hidden_count(&self, visible_lanes: usize) -> usize {
        self.occupied().filter(|(lane, _)| *lane >= visible_lanes).count()
    }
}

/// Where one event landed in a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneAssignment {
    pub event_id: EventId,
    pub lane: usize,
    /// Inclusive day indices (0-6) of the clipped span.
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Packed lanes for one week row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekLayout {
    pub week: WeekRow,
    pub days: Vec<DayLanes>,
    /// Assignments in placement order.
    pub assignments: Vec<LaneAssignment>,
}

impl WeekLayout {
    /// Number of lanes the busiest day needs.
    pub fn lane_count(&self) -> usize {
        self.days.iter().map(|day| day.slots.len()).max().unwrap_or(0)
    }

    pub fn lane_of(&self, id: &EventId) -> Option<usize> {
        self.assignments
            .iter()
            .find(|assignment| &assignment.event_id == id)
            .map(|assignment| assignment.lane)
    }

    pub fn slot(&self, day_index: usize, lane: usize) -> Option<&LaneSlot> {
        self.days.get(day_index)?.slots.get(lane)
    }
}

/// Clipped `[start_offset, end_offset]` of `event` within `week`, or `None`
/// when the event does not touch the week or its range is inverted.
pub fn clipped_span(event: &Event, week: &WeekRow) -> Option<(usize, usize)> {
    if event.end_day() < event.start_day() || !event.overlaps(week.start(), week.end()) {
        return None;
    }

    let last = (DAYS_PER_WEEK - 1) as i64;
    let start_offset = days_between(week.start(), event.start_day()).max(0);
    let end_offset = days_between(week.start(), event.end_day()).min(last);
    Some((start_offset as usize, end_offset as usize))
}

/// Order in which events claim lanes: start day ascending, then duration
/// descending. The sort is stable, so full ties keep their incoming order.
pub fn placement_order(events: &mut [&Event]) {
    events.sort_by(|a, b| {
        a.start_day()
            .cmp(&b.start_day())
            .then_with(|| b.duration_days().cmp(&a.duration_days()))
    });
}

/// Assign lanes for every event overlapping `week`.
///
/// Pure: the result depends only on the week and the events (and their
/// iteration order for exact ties). Events with `end < start` are skipped.
pub fn pack_week<'a, I>(week: &WeekRow, events: I) -> WeekLayout
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut candidates: Vec<&Event> = events
        .into_iter()
        .filter(|event| {
            if event.end_day() < event.start_day() {
                log::warn!(
                    "Skipping event {} with end {} before start {}",
                    event.id,
                    event.end_day(),
                    event.start_day()
                );
                return false;
            }
            event.overlaps(week.start(), week.end())
        })
        .collect();
    placement_order(&mut candidates);

    // Per day, lane -> index into `placed`. Grown only as far as used.
    let mut occupancy: [Vec<Option<usize>>; DAYS_PER_WEEK] = Default::default();
    let mut placed: Vec<(&Event, LaneAssignment)> = Vec::with_capacity(candidates.len());

    for event in candidates {
        let Some((start_offset, end_offset)) = clipped_span(event, week) else {
            continue;
        };

        let is_free = |lane: usize| {
            occupancy[start_offset..=end_offset]
                .iter()
                .all(|day| day.get(lane).map_or(true, Option::is_none))
        };
        let mut lane = 0;
        while !is_free(lane) {
            lane += 1;
        }

        let index = placed.len();
        for day in &mut occupancy[start_offset..=end_offset] {
            if day.len() <= lane {
                day.resize(lane + 1, None);
            }
            day[lane] = Some(index);
        }

        placed.push((
            event,
            LaneAssignment {
                event_id: event.id.clone(),
                lane,
                start_offset,
                end_offset,
            },
        ));
    }

    let days = week
        .days()
        .iter()
        .zip(occupancy.iter())
        .enumerate()
        .map(|(day_index, (date, lanes))| DayLanes {
            date: *date,
            slots: lanes
                .iter()
                .map(|cell| match cell {
                    None => LaneSlot::Empty,
                    Some(index) => {
                        let (event, assignment) = &placed[*index];
                        LaneSlot::Event(LaneFragment {
                            event_id: event.id.clone(),
                            is_start: event.start_day() == *date,
                            is_end: event.end_day() == *date,
                            is_segment_start: assignment.start_offset == day_index,
                        })
                    }
                })
                .collect(),
        })
        .collect();

    log::debug!(
        "Packed week of {} into {} assignment(s)",
        week.start(),
        placed.len()
    );

    WeekLayout {
        week: *week,
        days,
        assignments: placed.into_iter().map(|(_, assignment)| assignment).collect(),
    }
}
