// Event module
// Calendar event model with calendar-day granular ranges

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::alarm::Alarm;
use crate::models::category::Category;
use crate::utils::date::{normalize, parse_display_time, start_of_day};

/// Display string used as `time` for all-day events.
pub const ALL_DAY_LABEL: &str = "All Day";

/// Default start time offered for new timed events.
pub const DEFAULT_EVENT_TIME: &str = "12:00";

/// Opaque, immutable event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Validation failures surfaced to the event form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end date must not be before its start date")]
    EndBeforeStart,
    #[error("Event {0} is required")]
    MissingField(&'static str),
}

/// Calendar event.
///
/// `start` and `end` keep whatever time-of-day they were created with, but
/// every range and overlap comparison goes through [`Event::start_day`] and
/// [`Event::end_day`], which discard it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub alarm: Alarm,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: Category,
}

fn default_time() -> String {
    DEFAULT_EVENT_TIME.to_string()
}

impl Event {
    /// Create a single-day timed event on `day` with form defaults.
    ///
    /// # Examples
    /// ```
    /// use month_calendar::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
    /// let event = Event::new_on("evt-1", "Standup", day).unwrap();
    /// assert_eq!(event.duration_days(), 0);
    /// ```
    pub fn new_on(
        id: impl Into<EventId>,
        title: impl Into<String>,
        day: NaiveDate,
    ) -> Result<Self, EventValidationError> {
        Self::builder().id(id).title(title).dates(day, day).build()
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event the way the event form does before saving.
    ///
    /// The store itself accepts unvalidated events.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        if self.end_day() < self.start_day() {
            return Err(EventValidationError::EndBeforeStart);
        }
        Ok(())
    }

    pub fn start_day(&self) -> NaiveDate {
        normalize(self.start)
    }

    pub fn end_day(&self) -> NaiveDate {
        normalize(self.end)
    }

    /// Length in whole days (0 for a single-day event, negative when malformed).
    pub fn duration_days(&self) -> i64 {
        (self.end_day() - self.start_day()).num_days()
    }

    pub fn is_multi_day(&self) -> bool {
        self.duration_days() > 0
    }

    /// Whether the normalized range contains `day` (inclusive at both ends).
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_day() <= day && day <= self.end_day()
    }

    /// Whether the normalized range intersects `[first, last]`.
    pub fn overlaps(&self, first: NaiveDate, last: NaiveDate) -> bool {
        self.start_day() <= last && self.end_day() >= first
    }

    /// Time shown next to the title.
    pub fn display_time(&self) -> &str {
        if self.is_all_day {
            ALL_DAY_LABEL
        } else {
            &self.time
        }
    }

    /// Moment a reminder would fire, if an alarm is set.
    ///
    /// All-day events (and timed events whose `time` does not parse) anchor
    /// on the start of their first day.
    pub fn reminder_at(&self) -> Option<NaiveDateTime> {
        let lead = self.alarm.lead_time()?;
        let anchor = if self.is_all_day {
            start_of_day(self.start_day())
        } else {
            parse_display_time(&self.time)
                .map(|time| self.start_day().and_time(time))
                .unwrap_or_else(|| start_of_day(self.start_day()))
        };
        Some(anchor - lead)
    }

    /// Copy of the event moved by `days`, keeping its duration.
    ///
    /// `None` when either end would leave chrono's date range.
    pub fn shifted_by_days(&self, days: i64) -> Option<Self> {
        let delta = Duration::days(days);
        Some(Self {
            start: self.start.checked_add_signed(delta)?,
            end: self.end.checked_add_signed(delta)?,
            ..self.clone()
        })
    }
}

/// Builder for creating events with optional fields
#[derive(Debug, Clone, Default)]
pub struct EventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    is_all_day: bool,
    time: Option<String>,
    location: String,
    description: String,
    alarm: Alarm,
    author: String,
    category: Category,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<EventId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set both ends from calendar days (midnight).
    pub fn dates(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start(start_of_day(start)).end(start_of_day(end))
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.is_all_day = all_day;
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn alarm(mut self, alarm: Alarm) -> Self {
        self.alarm = alarm;
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Build and validate the event.
    pub fn build(self) -> Result<Event, EventValidationError> {
        let id = self.id.ok_or(EventValidationError::MissingField("id"))?;
        let title = self.title.ok_or(EventValidationError::MissingField("title"))?;
        let start = self.start.ok_or(EventValidationError::MissingField("start"))?;
        let end = self.end.ok_or(EventValidationError::MissingField("end"))?;

        let time = if self.is_all_day {
            ALL_DAY_LABEL.to_string()
        } else {
            self.time.unwrap_or_else(default_time)
        };

        let event = Event {
            id,
            title,
            start,
            end,
            is_all_day: self.is_all_day,
            time,
            location: self.location,
            description: self.description,
            alarm: self.alarm,
            author: self.author,
            category: self.category,
        };

        event.validate()?;
        Ok(event)
    }
}
