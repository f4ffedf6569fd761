// Month Calendar Library
// Date grid, event store, week lane packing and drag relocation

pub mod models;
pub mod services;
pub mod ui_text; // Plain-text view layer used by the binary
pub mod utils;

pub use models::event::{Event, EventId};
pub use services::drag::relocate;
pub use services::event::{EventStore, StoreError};
pub use services::layout::{build_week_rows, pack_week, MonthLayout, WeekLayout, WeekRow};
