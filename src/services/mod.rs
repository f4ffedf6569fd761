// Service module exports

pub mod calendar;
pub mod drag;
pub mod event;
pub mod id;
pub mod layout;
pub mod seed;
pub mod settings;
