//! Reminder lead times attached to events.
//!
//! An alarm is descriptive only: it records how long before the event a
//! reminder would fire. Nothing in this crate schedules or delivers it.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alarm {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "10min")]
    TenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "1day")]
    OneDay,
}

impl Alarm {
    pub fn all() -> [Alarm; 5] {
        [
            Alarm::None,
            Alarm::TenMinutes,
            Alarm::ThirtyMinutes,
            Alarm::OneHour,
            Alarm::OneDay,
        ]
    }

    /// Wire key, identical to the serialized form.
    pub fn key(&self) -> &'static str {
        match self {
            Alarm::None => "none",
            Alarm::TenMinutes => "10min",
            Alarm::ThirtyMinutes => "30min",
            Alarm::OneHour => "1hour",
            Alarm::OneDay => "1day",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Alarm::None => "None",
            Alarm::TenMinutes => "10 minutes before",
            Alarm::ThirtyMinutes => "30 minutes before",
            Alarm::OneHour => "1 hour before",
            Alarm::OneDay => "1 day before",
        }
    }

    /// How far ahead of the event start the reminder sits, if any.
    pub fn lead_time(&self) -> Option<Duration> {
        match self {
            Alarm::None => None,
            Alarm::TenMinutes => Some(Duration::minutes(10)),
            Alarm::ThirtyMinutes => Some(Duration::minutes(30)),
            Alarm::OneHour => Some(Duration::hours(1)),
            Alarm::OneDay => Some(Duration::days(1)),
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Alarm::None)
    }
}

impl fmt::Display for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown alarm '{0}' (expected none, 10min, 30min, 1hour or 1day)")]
pub struct UnknownAlarm(pub String);

impl FromStr for Alarm {
    type Err = UnknownAlarm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Alarm::all()
            .into_iter()
            .find(|alarm| alarm.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownAlarm(s.to_string()))
    }
}
