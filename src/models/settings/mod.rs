// Settings module
// User-facing configuration for the month view

use serde::{Deserialize, Serialize};

use crate::utils::date::is_supported_date_format;

/// Month view settings, loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    /// "12h" or "24h"
    pub time_format: String,
    /// "YYYY-MM-DD", "YYYY/MM/DD", "DD/MM/YYYY" or "MM/DD/YYYY"
    pub date_format: String,
    /// Lanes drawn per day cell before collapsing into "+N more".
    pub max_visible_lanes: usize,
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            time_format: "24h".to_string(),
            date_format: "YYYY-MM-DD".to_string(),
            max_visible_lanes: 3,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }

        if self.time_format != "12h" && self.time_format != "24h" {
            return Err("time_format must be '12h' or '24h'".to_string());
        }

        if !is_supported_date_format(&self.date_format) {
            return Err(format!("Unsupported date_format '{}'", self.date_format));
        }

        if self.max_visible_lanes == 0 {
            return Err("max_visible_lanes must be at least 1".to_string());
        }

        if !matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "off" | "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(format!("Unknown log_level '{}'", self.log_level));
        }

        Ok(())
    }
}
