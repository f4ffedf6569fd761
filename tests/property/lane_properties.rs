// Property-based tests for the date grid, lane packing and relocation
// Random event sets around a single month exercise the packing guarantees

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use month_calendar::services::layout::{build_week_rows_from, clipped_span, LaneSlot};
use month_calendar::{build_week_rows, pack_week, relocate, Event, EventStore};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Events starting within ~6 weeks of Jan 2024, up to 10 days long.
fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((-7i64..42, 0i64..10), 0..24).prop_map(|spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (offset, len))| {
                let start = base() + Duration::days(offset);
                Event::builder()
                    .id(format!("e{i}"))
                    .title(format!("Event {i}"))
                    .dates(start, start + Duration::days(len))
                    .build()
                    .unwrap()
            })
            .collect()
    })
}

fn arb_month() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=12).prop_map(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1).unwrap())
}

proptest! {
    /// Property: the grid is whole weeks of consecutive days covering the month
    #[test]
    fn prop_grid_covers_month(month in arb_month(), fdow in 0u8..7) {
        let rows = build_week_rows_from(month, fdow);
        let days: Vec<NaiveDate> = rows.iter().flat_map(|r| r.days().iter().copied()).collect();

        prop_assert!(rows.len() >= 4 && rows.len() <= 6);
        prop_assert_eq!(days[0].weekday().num_days_from_sunday(), u32::from(fdow));
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        prop_assert!(days.contains(&month));
        let next_month = month.checked_add_months(chrono::Months::new(1)).unwrap();
        prop_assert!(days.contains(&next_month.pred_opt().unwrap()));
        // No row lies entirely outside the month.
        for row in &rows {
            prop_assert!(row.days().iter().any(|d| d.month() == month.month()));
        }
    }

    /// Property: two fragments never share a (day, lane) and every touching
    /// event is assigned exactly once, present on each of its clipped days
    #[test]
    fn prop_packing_is_collision_free(events in arb_events()) {
        for week in build_week_rows(base()) {
            let layout = pack_week(&week, &events);

            let assigned: HashSet<_> = layout.assignments.iter().map(|a| a.event_id.clone()).collect();
            prop_assert_eq!(assigned.len(), layout.assignments.len());

            for event in &events {
                let span = clipped_span(event, &week);
                prop_assert_eq!(span.is_some(), assigned.contains(&event.id));
                let Some((first, last)) = span else { continue };
                let lane = layout.lane_of(&event.id).unwrap();
                for day_index in first..=last {
                    let slot = layout.slot(day_index, lane).and_then(LaneSlot::fragment);
                    prop_assert_eq!(slot.map(|f| &f.event_id), Some(&event.id));
                }
            }

            let fragments: usize = layout.days.iter().map(|d| d.occupied().count()).sum();
            let expected: usize = layout
                .assignments
                .iter()
                .map(|a| a.end_offset - a.start_offset + 1)
                .sum();
            prop_assert_eq!(fragments, expected);
        }
    }

    /// Property: the week needs as many lanes as its busiest day has events
    #[test]
    fn prop_lane_count_matches_busiest_day(events in arb_events()) {
        for week in build_week_rows(base()) {
            let layout = pack_week(&week, &events);
            let busiest = week
                .days()
                .iter()
                .map(|day| events.iter().filter(|e| e.covers(*day)).count())
                .max()
                .unwrap_or(0);
            prop_assert_eq!(layout.lane_count(), busiest);
        }
    }

    /// Property: packing the same input twice gives the same layout
    #[test]
    fn prop_packing_is_deterministic(events in arb_events()) {
        let week = build_week_rows(base())[2];
        prop_assert_eq!(pack_week(&week, &events), pack_week(&week, &events));
    }

    /// Property: day queries return exactly the events covering that day
    #[test]
    fn prop_day_query_matches_covers(events in arb_events(), offset in -7i64..42) {
        let store = EventStore::with_events(events.clone()).unwrap();
        let day = base() + Duration::days(offset);
        let found: HashSet<_> = store.query_by_day(day).into_iter().map(|e| e.id.clone()).collect();
        let expected: HashSet<_> = events.iter().filter(|e| e.covers(day)).map(|e| e.id.clone()).collect();
        prop_assert_eq!(found, expected);
    }

    /// Property: relocation moves the start to the target and keeps the length
    #[test]
    fn prop_relocation_preserves_duration(
        events in arb_events().prop_filter("need an event", |e| !e.is_empty()),
        pick in any::<prop::sample::Index>(),
        target_offset in -60i64..60,
    ) {
        let chosen = pick.get(&events).clone();
        let mut store = EventStore::with_events(events).unwrap();
        let target = base() + Duration::days(target_offset);

        let moved = relocate(&mut store, &chosen.id, target).unwrap();
        prop_assert_eq!(moved.start_day(), target);
        prop_assert_eq!(moved.duration_days(), chosen.duration_days());
        prop_assert_eq!(moved.start.time(), chosen.start.time());
        prop_assert_eq!(store.get(&chosen.id), Some(&moved));
    }
}
