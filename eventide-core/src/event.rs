//! Event types.
//!
//! `Event` is the shape exchanged over the HTTP API (string id, RFC 3339
//! timestamps). `EventRecord` is the shape persisted in the document store
//! (ObjectId `_id`, native BSON datetimes so date sorting happens in the
//! store). Request payloads carry their own validation rules so malformed
//! input is rejected before the store is touched.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use bson::{Bson, Document, doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An event as seen by API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// An event as persisted in the store.
///
/// `id` is `None` only before the first insert; the store assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(rename = "createdAt", with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl EventRecord {
    /// Build a fresh record from a create payload. `createdAt` is stamped
    /// here, once, and never touched again.
    pub fn new(payload: CreateEvent) -> Self {
        Self {
            id: None,
            title: payload.title,
            description: payload.description,
            date: payload.date,
            location: payload.location,
            created_at: Utc::now(),
        }
    }
}

impl From<EventRecord> for Event {
    fn from(record: EventRecord) -> Self {
        Self {
            id: record.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: record.title,
            description: record.description,
            date: record.date,
            location: record.location,
            created_at: record.created_at,
        }
    }
}

/// Payload for creating an event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEvent {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
}

/// Payload for updating an event. Only the supplied fields are replaced;
/// `id` and `createdAt` are never writable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEvent {
    #[validate(length(min = 1, message = "title must not be empty"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "location must not be empty"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl UpdateEvent {
    /// True when the payload names no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.location.is_none()
    }

    /// Build the `$set` document containing exactly the supplied fields.
    pub fn into_set_document(self) -> Document {
        let mut set = doc! {};
        if let Some(title) = self.title {
            set.insert("title", title);
        }
        if let Some(description) = self.description {
            set.insert("description", description);
        }
        if let Some(date) = self.date {
            set.insert("date", Bson::DateTime(bson::DateTime::from_chrono(date)));
        }
        if let Some(location) = self.location {
            set.insert("location", location);
        }
        set
    }
}
