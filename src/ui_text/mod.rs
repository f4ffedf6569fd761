//! Plain-text month view.
//!
//! A minimal stand-in for a graphical front end: it only reads a
//! [`MonthLayout`] and the store, exactly like any other view layer would.

use chrono::{Datelike, NaiveDate};
use std::fmt::Write as _;

use crate::models::event::Event;
use crate::models::settings::Settings;
use crate::services::event::EventStore;
use crate::services::layout::{LaneFragment, LaneSlot, MonthLayout, DAYS_PER_WEEK};
use crate::utils::date::{format_date, is_same_month, parse_display_time, weekday_names};

/// Characters per day column.
pub const CELL_WIDTH: usize = 12;

fn pad(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

/// One lane cell: `[Title====]` for a whole event, `<` / `>` where it
/// continues into the previous / next week row, `=` for continuation days.
fn fragment_cell(fragment: &LaneFragment, title: &str, day_index: usize) -> String {
    let inner = CELL_WIDTH - 2;
    let left = match (fragment.is_segment_start, fragment.is_start) {
        (true, true) => '[',
        (true, false) => '<',
        (false, _) => '=',
    };
    let right = if fragment.is_end {
        ']'
    } else if day_index == DAYS_PER_WEEK - 1 {
        '>'
    } else {
        '='
    };
    let middle: String = if fragment.is_segment_start {
        let label: String = title.chars().take(inner).collect();
        let fill = inner - label.chars().count();
        format!("{}{}", label, "=".repeat(fill))
    } else {
        "=".repeat(inner)
    };
    format!("{}{}{}", left, middle, right)
}

/// Render the whole month grid.
pub fn render_month(layout: &MonthLayout, store: &EventStore, settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        layout.month.format("%B"),
        layout.month.year()
    );

    let header: Vec<String> = weekday_names(settings.first_day_of_week)
        .iter()
        .map(|name| pad(name, CELL_WIDTH))
        .collect();
    let _ = writeln!(out, "{}", header.join(" ").trim_end());

    let visible = settings.max_visible_lanes.max(1);
    for week in &layout.weeks {
        let numbers: Vec<String> = week
            .days
            .iter()
            .map(|day| {
                if is_same_month(day.date, layout.month) {
                    pad(&day.date.day().to_string(), CELL_WIDTH)
                } else {
                    pad(&format!("({})", day.date.day()), CELL_WIDTH)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", numbers.join(" ").trim_end());

        for lane in 0..week.lane_count().min(visible) {
            let cells: Vec<String> = week
                .days
                .iter()
                .enumerate()
                .map(|(day_index, day)| match day.slots.get(lane) {
                    Some(LaneSlot::Event(fragment)) => {
                        let title = store
                            .get(&fragment.event_id)
                            .map(|event| event.title.as_str())
                            .unwrap_or("?");
                        fragment_cell(fragment, title, day_index)
                    }
                    Some(LaneSlot::Empty) | None => " ".repeat(CELL_WIDTH),
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join(" ").trim_end());
        }

        if week.days.iter().any(|day| day.hidden_count(visible) > 0) {
            let cells: Vec<String> = week
                .days
                .iter()
                .map(|day| match day.hidden_count(visible) {
                    0 => " ".repeat(CELL_WIDTH),
                    hidden => pad(&format!("+{} more", hidden), CELL_WIDTH),
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join(" ").trim_end());
        }
        out.push('\n');
    }

    out
}

/// Time label honouring the 12h/24h setting.
pub fn format_event_time(event: &Event, settings: &Settings) -> String {
    if event.is_all_day || settings.time_format != "12h" {
        return event.display_time().to_string();
    }
    match parse_display_time(&event.time) {
        Some(time) => time.format("%-I:%M %p").to_string(),
        None => event.time.clone(),
    }
}

/// The "events this month" list: one entry per event starting in `month`.
pub fn render_agenda(month: NaiveDate, events: &[&Event], settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Events for {}", month.format("%B"));

    if events.is_empty() {
        let _ = writeln!(out, "  No events scheduled for this month.");
        return out;
    }

    for event in events {
        let _ = writeln!(
            out,
            "  {}  {}  [{}]",
            format_date(event.start_day(), &settings.date_format),
            event.title,
            event.category.label()
        );
        let mut details = format!("      {}", format_event_time(event, settings));
        if !event.location.is_empty() {
            let _ = write!(details, "  @ {}", event.location);
        }
        if event.alarm.is_set() {
            let _ = write!(details, "  ({})", event.alarm.label());
        }
        let _ = writeln!(out, "{}", details);
    }
    out
}
