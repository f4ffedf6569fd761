// Module exports for models

pub mod alarm;
pub mod category;
pub mod event;
pub mod settings;
