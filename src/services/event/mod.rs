//! In-memory event store.
//! Holds the only authoritative copy of every event; mutations live in
//! `crud`, range queries in `queries`, and change notifications in
//! `observers`.

use std::fmt;

use crate::models::event::{Event, EventId};

pub mod crud;
mod error;
pub mod observers;
pub mod queries;

pub use error::StoreError;
pub use observers::{StoreChange, SubscriptionId};

type Observer = Box<dyn FnMut(&StoreChange)>;

/// Transient event collection shared by the grid, packer and drag code.
///
/// Events keep their insertion order (updates replace in place). That order
/// has no meaning for display but is the pre-sort order the lane packer's
/// stable sort falls back on.
#[derive(Default)]
pub struct EventStore {
    pub(crate) events: Vec<Event>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed events, rejecting duplicate ids.
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for event in events {
            store.add(event)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in storage order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.position(id).is_some()
    }

    pub(crate) fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|event| &event.id == id)
    }
}

impl fmt::Debug for EventStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStore")
            .field("events", &self.events)
            .field("observers", &self.observers.len())
            .finish()
    }
}
