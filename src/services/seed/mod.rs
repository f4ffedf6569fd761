//! Seeding the transient store from a TOML event list.
//!
//! The store itself never persists anything; this only lets the binary (and
//! tests) start from a known set of events.
//!
//! ```toml
//! [[events]]
//! title = "Ski trip"
//! start = "2024-01-08"
//! end = "2024-01-10"
//! all_day = true
//! category = "vacation"
//! alarm = "1day"
//! ```

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::alarm::Alarm;
use crate::models::category::Category;
use crate::models::event::{Event, EventId, ALL_DAY_LABEL, DEFAULT_EVENT_TIME};
use crate::services::event::EventStore;
use crate::services::id::IdGenerator;
use crate::utils::date::start_of_day;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    events: Vec<SeedEvent>,
}

#[derive(Debug, Deserialize)]
struct SeedEvent {
    id: Option<String>,
    title: String,
    start: String,
    end: Option<String>,
    #[serde(default)]
    all_day: bool,
    time: Option<String>,
    #[serde(default)]
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    alarm: Alarm,
    #[serde(default)]
    author: String,
    #[serde(default)]
    category: Category,
}

/// Accepts "2024-01-08", "2024-01-08T09:30" or "2024-01-08T09:30:00".
fn parse_moment(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d").map(start_of_day))
        .map_err(|_| anyhow!("Invalid date '{}'", value))
}

fn to_event(seed: SeedEvent, ids: &dyn IdGenerator) -> Result<Event> {
    let start = parse_moment(&seed.start)?;
    let end = match seed.end.as_deref() {
        Some(value) => parse_moment(value)?,
        None => start,
    };
    let time = if seed.all_day {
        ALL_DAY_LABEL.to_string()
    } else {
        seed.time.unwrap_or_else(|| DEFAULT_EVENT_TIME.to_string())
    };

    Ok(Event {
        id: seed.id.map(EventId::new).unwrap_or_else(|| ids.next_id()),
        title: seed.title,
        start,
        end,
        is_all_day: seed.all_day,
        time,
        location: seed.location,
        description: seed.description,
        alarm: seed.alarm,
        author: seed.author,
        category: seed.category,
    })
}

/// Parse a TOML seed document into events.
///
/// Entries with a blank title are skipped. Entries whose end precedes their
/// start are kept as-is; the lane packer leaves them out.
pub fn import_events(content: &str, ids: &dyn IdGenerator) -> Result<Vec<Event>> {
    let file: SeedFile = toml::from_str(content).context("Failed to parse event seed file")?;

    let mut events = Vec::with_capacity(file.events.len());
    for (index, seed) in file.events.into_iter().enumerate() {
        if seed.title.trim().is_empty() {
            log::warn!("Skipping seed event #{} with an empty title", index + 1);
            continue;
        }
        let event =
            to_event(seed, ids).with_context(|| format!("Invalid seed event #{}", index + 1))?;
        if event.end_day() < event.start_day() {
            log::warn!("Seed event {} ends before it starts", event.id);
        }
        events.push(event);
    }
    Ok(events)
}

/// Import events from a seed file on disk
pub fn import_from_file(path: &Path, ids: &dyn IdGenerator) -> Result<Vec<Event>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    import_events(&content, ids)
}

/// Add every seed event to `store`, returning how many were added.
pub fn load_into(store: &mut EventStore, path: &Path, ids: &dyn IdGenerator) -> Result<usize> {
    let events = import_from_file(path, ids)?;
    let count = events.len();
    for event in events {
        store.add(event)?;
    }
    log::info!("Loaded {} event(s) from {}", count, path.display());
    Ok(count)
}
