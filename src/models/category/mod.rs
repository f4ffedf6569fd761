//! Category model for grouping events visually.
//!
//! The set of categories is closed: every event carries exactly one of the
//! seven tags below, each mapped to a display color and label. Categories
//! never influence layout or scheduling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A category tag for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Important,
    Personal1,
    Personal2,
    Joint,
    #[default]
    Event,
    Vacation,
    Business,
}

impl Category {
    /// Every category, in menu order.
    pub fn all() -> [Category; 7] {
        [
            Category::Important,
            Category::Personal1,
            Category::Personal2,
            Category::Joint,
            Category::Event,
            Category::Vacation,
            Category::Business,
        ]
    }

    /// Stable lowercase key (matches the serialized form).
    pub fn key(&self) -> &'static str {
        match self {
            Category::Important => "important",
            Category::Personal1 => "personal1",
            Category::Personal2 => "personal2",
            Category::Joint => "joint",
            Category::Event => "event",
            Category::Vacation => "vacation",
            Category::Business => "business",
        }
    }

    /// Human readable label for legends and pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Important => "Important",
            Category::Personal1 => "Personal 1",
            Category::Personal2 => "Personal 2",
            Category::Joint => "Joint",
            Category::Event => "Event",
            Category::Vacation => "Vacation",
            Category::Business => "Business Trip",
        }
    }

    /// Hex color code (e.g. "#ef4444").
    pub fn color(&self) -> &'static str {
        match self {
            Category::Important => "#ef4444", // red
            Category::Personal1 => "#eab308", // yellow
            Category::Personal2 => "#3b82f6", // blue
            Category::Joint => "#a855f7",     // purple
            Category::Event => "#f97316",     // orange
            Category::Vacation => "#22c55e",  // green
            Category::Business => "#06b6d4",  // cyan
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::all()
            .into_iter()
            .find(|category| category.key() == needle)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_seven_distinct_categories() {
        let all = Category::all();
        assert_eq!(all.len(), 7);
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn test_colors_are_valid_hex() {
        for category in Category::all() {
            let color = category.color();
            let hex = color.strip_prefix('#').unwrap();
            assert_eq!(hex.len(), 6, "{:?}", category);
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit()), "{:?}", category);
        }
    }

    #[test]
    fn test_default_is_event() {
        assert_eq!(Category::default(), Category::Event);
    }

    #[test]
    fn test_from_str_round_trips_keys() {
        for category in Category::all() {
            assert_eq!(category.key().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Vacation ".parse::<Category>(), Ok(Category::Vacation));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "birthday".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown category 'birthday'");
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&Category::Personal2).unwrap();
        assert_eq!(json, "\"personal2\"");
        let parsed: Category = serde_json::from_str("\"business\"").unwrap();
        assert_eq!(parsed, Category::Business);
    }
}
