//! Mutation notifications for views that re-derive layout on change.

use super::EventStore;
use crate::models::event::{Event, EventId};

/// Handle returned by [`EventStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A committed store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Added(Event),
    Updated { before: Event, after: Event },
    Deleted(Event),
}

impl StoreChange {
    pub fn event_id(&self) -> &EventId {
        match self {
            StoreChange::Added(event) | StoreChange::Deleted(event) => &event.id,
            StoreChange::Updated { after, .. } => &after.id,
        }
    }

    /// Short form for logs, e.g. "updated evt-3".
    pub fn describe(&self) -> String {
        let verb = match self {
            StoreChange::Added(_) => "added",
            StoreChange::Updated { .. } => "updated",
            StoreChange::Deleted(_) => "deleted",
        };
        format!("{} {}", verb, self.event_id())
    }
}

impl EventStore {
    /// Register a callback invoked after every successful mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback; returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(super) fn notify(&mut self, change: &StoreChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer(change);
        }
    }
}
