//! Event store binding.
//!
//! `EventStore` is the seam between the HTTP layer and the document store.
//! Implementations validate payloads before touching the store.

mod mongo;

pub use mongo::MongoEventStore;

use async_trait::async_trait;

use crate::error::EventResult;
use crate::event::{CreateEvent, Event, UpdateEvent};

/// Storage operations on events.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events, ascending by `date`.
    async fn list(&self) -> EventResult<Vec<Event>>;

    /// One event by id. `InvalidId` for a malformed id, `NotFound` when
    /// no record matches.
    async fn get(&self, id: &str) -> EventResult<Event>;

    /// Validate and insert, returning the persisted record with its
    /// generated id and `createdAt`.
    async fn create(&self, payload: CreateEvent) -> EventResult<Event>;

    /// Replace the supplied fields of the matching record and return the
    /// post-update record.
    async fn update(&self, id: &str, changes: UpdateEvent) -> EventResult<Event>;

    /// Remove the matching record. Deleting an absent id is `NotFound`.
    async fn delete(&self, id: &str) -> EventResult<()>;
}
