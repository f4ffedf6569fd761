use thiserror::Error;

use crate::models::event::EventId;

/// Recoverable store failures reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Event with id {0} already exists")]
    DuplicateId(EventId),
    #[error("Event with id {0} not found")]
    NotFound(EventId),
}
