//! Event CRUD endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Serialize;

use eventide_core::{CreateEvent, Event, UpdateEvent};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

/// Confirmation body for deletes.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/events - all events, ascending by date
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.store.list().await?;
    Ok(Json(events))
}

/// GET /api/events/{id}
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let event = state.store.get(&id).await?;
    Ok(Json(event))
}

/// POST /api/events
async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEvent>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let event = state.store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/{id} - replace the supplied fields
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<UpdateEvent>,
) -> Result<Json<Event>, AppError> {
    let event = state.store.update(&id, changes).await?;
    Ok(Json(event))
}

/// DELETE /api/events/{id}
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Event deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::routes::test_support::{MemoryStore, app};

    async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    fn standup() -> Value {
        json!({
            "title": "Standup",
            "description": "daily",
            "date": "2025-01-10T09:00:00Z",
            "location": "Room A"
        })
    }

    #[tokio::test]
    async fn create_returns_201_with_generated_id_and_created_at() {
        let app = app(Arc::new(MemoryStore::default()));

        let response = app
            .oneshot(request("POST", "/api/events", Some(standup())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let event: Event = json_body(response.into_body()).await;
        assert!(!event.id.is_empty());
        assert_eq!(event.title, "Standup");
        assert_eq!(event.location, "Room A");
    }

    #[tokio::test]
    async fn get_after_create_returns_identical_record() {
        let store = Arc::new(MemoryStore::default());
        let app = app(store);

        let response = app
            .clone()
            .oneshot(request("POST", "/api/events", Some(standup())))
            .await
            .unwrap();
        let created: Event = json_body(response.into_body()).await;

        let response = app
            .oneshot(request("GET", &format!("/api/events/{}", created.id), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: Event = json_body(response.into_body()).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn list_returns_events_sorted_ascending_by_date() {
        let app = app(Arc::new(MemoryStore::default()));

        for date in ["2025-03-01T12:00:00Z", "2025-01-10T09:00:00Z", "2025-02-14T18:30:00Z"] {
            let mut payload = standup();
            payload["date"] = json!(date);
            let response = app
                .clone()
                .oneshot(request("POST", "/api/events", Some(payload)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(request("GET", "/api/events", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let events: Vec<Event> = json_body(response.into_body()).await;
        assert_eq!(events.len(), 3);
        assert!(events.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }

    #[tokio::test]
    async fn get_unknown_id_returns_404() {
        let app = app(Arc::new(MemoryStore::default()));
        let response = app
            .oneshot(request("GET", "/api/events/507f1f77bcf86cd799439011", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_id_returns_400_not_500() {
        let app = app(Arc::new(MemoryStore::default()));
        let response = app
            .oneshot(request("GET", "/api/events/not-a-valid-id", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_empty_title_returns_400() {
        let app = app(Arc::new(MemoryStore::default()));
        let mut payload = standup();
        payload["title"] = json!("");
        let response = app
            .oneshot(request("POST", "/api/events", Some(payload)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_replaces_only_supplied_fields() {
        let app = app(Arc::new(MemoryStore::default()));

        let response = app
            .clone()
            .oneshot(request("POST", "/api/events", Some(standup())))
            .await
            .unwrap();
        let created: Event = json_body(response.into_body()).await;

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                &format!("/api/events/{}", created.id),
                Some(json!({ "title": "Retro" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated: Event = json_body(response.into_body()).await;

        assert_eq!(updated.title, "Retro");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.location, created.location);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_404() {
        let app = app(Arc::new(MemoryStore::default()));
        let response = app
            .oneshot(request(
                "PUT",
                "/api/events/507f1f77bcf86cd799439011",
                Some(json!({ "title": "Retro" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_with_no_fields_returns_400() {
        let app = app(Arc::new(MemoryStore::default()));

        let response = app
            .clone()
            .oneshot(request("POST", "/api/events", Some(standup())))
            .await
            .unwrap();
        let created: Event = json_body(response.into_body()).await;

        let response = app
            .oneshot(request(
                "PUT",
                &format!("/api/events/{}", created.id),
                Some(json!({})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_then_get_returns_404_and_second_delete_is_not_found() {
        let app = app(Arc::new(MemoryStore::default()));

        let response = app
            .clone()
            .oneshot(request("POST", "/api/events", Some(standup())))
            .await
            .unwrap();
        let created: Event = json_body(response.into_body()).await;
        let uri = format!("/api/events/{}", created.id);

        let response = app.clone().oneshot(request("DELETE", &uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let confirmation: Value = json_body(response.into_body()).await;
        assert_eq!(confirmation["message"], "Event deleted successfully");

        let response = app.clone().oneshot(request("GET", &uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(request("DELETE", &uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn error_body_carries_a_message() {
        let app = app(Arc::new(MemoryStore::default()));
        let response = app
            .oneshot(request("GET", "/api/events/507f1f77bcf86cd799439011", None))
            .await
            .unwrap();
        let body: Value = json_body(response.into_body()).await;
        assert!(body["message"].as_str().unwrap().contains("not found"));
    }
}
