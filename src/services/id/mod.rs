//! Event id generation.
//!
//! The view layer asks a generator for a fresh id whenever it creates an
//! event; the store only checks uniqueness.

use std::cell::Cell;
use uuid::Uuid;

use crate::models::event::EventId;

/// Source of fresh event identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    fn next_id(&self) -> EventId;
}

/// Random v4 UUIDs, the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> EventId {
        EventId::new(Uuid::new_v4().to_string())
    }
}

/// Predictable ids ("evt-1", "evt-2", ...) for demos and tests.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("evt")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> EventId {
        let n = self.next.get();
        self.next.set(n + 1);
        EventId::new(format!("{}-{}", self.prefix, n))
    }
}
