use super::{EventStore, StoreChange, StoreError};
use crate::models::event::{Event, EventId};

impl EventStore {
    /// Insert a new event.
    ///
    /// Fails with [`StoreError::DuplicateId`] if the id is already stored.
    /// The event is not validated; malformed ranges are filtered out later by
    /// the lane packer.
    pub fn add(&mut self, event: Event) -> Result<(), StoreError> {
        if self.contains(&event.id) {
            log::warn!("Rejected event with duplicate id {}", event.id);
            return Err(StoreError::DuplicateId(event.id));
        }

        log::debug!(
            "Adding event {} ({} .. {})",
            event.id,
            event.start_day(),
            event.end_day()
        );
        self.events.push(event.clone());
        self.notify(&StoreChange::Added(event));
        Ok(())
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    /// Replace the stored event with the same id, keeping its position.
    pub fn update(&mut self, event: Event) -> Result<(), StoreError> {
        let Some(index) = self.position(&event.id) else {
            return Err(StoreError::NotFound(event.id));
        };

        log::debug!("Updating event {}", event.id);
        let before = std::mem::replace(&mut self.events[index], event.clone());
        self.notify(&StoreChange::Updated {
            before,
            after: event,
        });
        Ok(())
    }

    /// Remove an event by ID, returning it if it existed.
    ///
    /// Deleting an unknown id is a silent no-op: a delete racing a redraw
    /// is expected.
    pub fn delete(&mut self, id: &EventId) -> Option<Event> {
        let Some(index) = self.position(id) else {
            log::debug!("Delete ignored, event {} not present", id);
            return None;
        };

        let removed = self.events.remove(index);
        log::debug!("Deleted event {}", id);
        self.notify(&StoreChange::Deleted(removed.clone()));
        Some(removed)
    }
}
