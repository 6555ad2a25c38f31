//! Core types for the eventide ecosystem.
//!
//! This crate provides everything shared between eventide-server and
//! eventide-cli:
//! - `Event` and its request payloads (`CreateEvent`, `UpdateEvent`)
//! - `EventError` for the not-found / validation / store failure taxonomy
//! - the `EventStore` trait and its MongoDB implementation

pub mod error;
pub mod event;
pub mod store;

// Re-export the common types at crate root for convenience
pub use error::{EventError, EventResult};
pub use event::{CreateEvent, Event, EventRecord, UpdateEvent};
pub use store::{EventStore, MongoEventStore};
