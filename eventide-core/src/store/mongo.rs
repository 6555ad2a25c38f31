//! MongoDB implementation of `EventStore`.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use mongodb::{Collection, Database};
use tracing::instrument;
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::event::{CreateEvent, Event, EventRecord, UpdateEvent};
use crate::store::EventStore;

const COLLECTION: &str = "events";

/// Event store backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoEventStore {
    collection: Collection<EventRecord>,
}

impl MongoEventStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }

    fn parse_id(id: &str) -> EventResult<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| EventError::InvalidId(id.to_string()))
    }
}

#[async_trait]
impl EventStore for MongoEventStore {
    #[instrument(skip(self))]
    async fn list(&self) -> EventResult<Vec<Event>> {
        let options = FindOptions::builder().sort(doc! { "date": 1 }).build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let records: Vec<EventRecord> = cursor.try_collect().await?;
        Ok(records.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> EventResult<Event> {
        let oid = Self::parse_id(id)?;
        let record = self
            .collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(|| EventError::NotFound(id.to_string()))?;
        Ok(record.into())
    }

    #[instrument(skip(self, payload), fields(title = %payload.title))]
    async fn create(&self, payload: CreateEvent) -> EventResult<Event> {
        payload.validate()?;
        let mut record = EventRecord::new(payload);
        let result = self.collection.insert_one(&record).await?;
        record.id = result.inserted_id.as_object_id();
        Ok(record.into())
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: &str, changes: UpdateEvent) -> EventResult<Event> {
        changes.validate()?;
        if changes.is_empty() {
            return Err(EventError::Validation(
                "update payload names no fields".to_string(),
            ));
        }
        let oid = Self::parse_id(id)?;
        let update = doc! { "$set": changes.into_set_document() };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let record = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, update)
            .with_options(options)
            .await?
            .ok_or_else(|| EventError::NotFound(id.to_string()))?;
        Ok(record.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> EventResult<()> {
        let oid = Self::parse_id(id)?;
        self.collection
            .find_one_and_delete(doc! { "_id": oid })
            .await?
            .ok_or_else(|| EventError::NotFound(id.to_string()))?;
        Ok(())
    }
}
