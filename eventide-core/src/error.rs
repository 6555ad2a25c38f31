//! Error types for the eventide ecosystem.

use thiserror::Error;

/// Errors that can occur when working with events.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Invalid event id: {0}")]
    InvalidId(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for event operations.
pub type EventResult<T> = Result<T, EventError>;

impl From<validator::ValidationErrors> for EventError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for EventError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::Serialization(format!("BSON serialization error: {err}"))
    }
}

impl From<mongodb::bson::de::Error> for EventError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        Self::Serialization(format!("BSON deserialization error: {err}"))
    }
}
