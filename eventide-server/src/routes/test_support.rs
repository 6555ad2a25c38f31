//! In-memory `EventStore` double and router builder for route tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use eventide_core::{CreateEvent, Event, EventError, EventResult, EventStore, UpdateEvent};

use crate::state::AppState;

/// Store double with the same contract as `MongoEventStore`: validation
/// before writes, `InvalidId` for malformed ids, `NotFound` for misses.
#[derive(Default)]
pub struct MemoryStore {
    events: Mutex<Vec<Event>>,
}

fn check_id(id: &str) -> EventResult<()> {
    ObjectId::parse_str(id)
        .map(|_| ())
        .map_err(|_| EventError::InvalidId(id.to_string()))
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn list(&self) -> EventResult<Vec<Event>> {
        let mut events = self.events.lock().unwrap().clone();
        events.sort_by_key(|event| event.date);
        Ok(events)
    }

    async fn get(&self, id: &str) -> EventResult<Event> {
        check_id(id)?;
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or_else(|| EventError::NotFound(id.to_string()))
    }

    async fn create(&self, payload: CreateEvent) -> EventResult<Event> {
        payload.validate()?;
        let event = Event {
            id: ObjectId::new().to_hex(),
            title: payload.title,
            description: payload.description,
            date: payload.date,
            location: payload.location,
            created_at: Utc::now(),
        };
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn update(&self, id: &str, changes: UpdateEvent) -> EventResult<Event> {
        changes.validate()?;
        if changes.is_empty() {
            return Err(EventError::Validation(
                "update payload names no fields".to_string(),
            ));
        }
        check_id(id)?;
        let mut events = self.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| EventError::NotFound(id.to_string()))?;
        if let Some(title) = changes.title {
            event.title = title;
        }
        if let Some(description) = changes.description {
            event.description = description;
        }
        if let Some(date) = changes.date {
            event.date = date;
        }
        if let Some(location) = changes.location {
            event.location = location;
        }
        Ok(event.clone())
    }

    async fn delete(&self, id: &str) -> EventResult<()> {
        check_id(id)?;
        let mut events = self.events.lock().unwrap();
        let position = events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| EventError::NotFound(id.to_string()))?;
        events.remove(position);
        Ok(())
    }
}

/// Full application router over the given store.
pub fn app(store: Arc<dyn EventStore>) -> Router {
    let state = AppState { store };
    Router::new()
        .merge(super::pages::router())
        .merge(super::events::router())
        .with_state(state)
}
