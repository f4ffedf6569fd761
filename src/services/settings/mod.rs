//! Settings persistence (TOML in the platform config directory).

mod service;

pub use service::SettingsService;
